//! Update function for the churn form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state through the `FormController`, and returns whether the
//! view should re-render.
//!
//! Key behaviors
//! - Field edits are stored as typed, without validation.
//! - `Submit` validates and, when the form passes, spawns the POST; the
//!   outcome comes back as `PredictionSettled`. A failing field gets focus.
//! - Every settlement resets the loading flag and shows exactly one toast.

use common::controller::Notice;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::client;
use super::helpers::{focus_field, show_notice};
use super::messages::Msg;
use super::state::ChurnForm;

pub fn update(component: &mut ChurnForm, ctx: &Context<ChurnForm>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            if component.controller.value(field) == value {
                return false;
            }
            component.controller.update_field(field, value);
            true
        }
        Msg::Submit => match component.controller.begin_submission() {
            Ok(payload) => {
                let endpoint = ctx.props().endpoint.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = client::predict(&endpoint, &payload).await;
                    link.send_message(Msg::PredictionSettled(outcome));
                });
                true
            }
            Err(err) => {
                show_notice(&Notice::from(&err));
                focus_field(err.field());
                false
            }
        },
        Msg::PredictionSettled(outcome) => {
            if let Err(err) = &outcome {
                error!("API Error:", err.to_string());
            }
            let notice = component.controller.finish_submission(outcome);
            show_notice(&notice);
            true
        }
    }
}
