//! Toast notifications for the churn form.
//!
//! Success and error toasts are injected straight into the document body and
//! remove themselves after a few seconds, so no toast container component is
//! needed.

use common::controller::{Notice, NoticeLevel};
use common::model::field::Field;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 4000;

/// Displays `notice` in the top-right corner of the page.
///
/// Used by `update.rs` for validation errors, for the success notice after a
/// prediction arrives, and for the generic failure notice.
pub fn show_notice(notice: &Notice) {
    let background = match notice.level {
        NoticeLevel::Success => "#2e7d32",
        NoticeLevel::Error => "#c62828",
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(&notice.message));
                toast.set_attribute("role", "status").ok();
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("right", "20px").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Moves focus to the input or select rendered for `field`.
pub fn focus_field(field: Field) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(field.name()));
    if let Some(element) = element {
        if let Ok(input) = element.dyn_into::<HtmlElement>() {
            input.focus().ok();
        }
    }
}
