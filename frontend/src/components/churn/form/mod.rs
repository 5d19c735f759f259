//! Churn form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ChurnFormProps`, `ChurnForm`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - The HTTP call lives in `client` so the update logic only deals with
//!   messages.

use yew::prelude::*;

mod client;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ChurnFormProps;
pub use state::ChurnForm;

impl Component for ChurnForm {
    type Message = Msg;
    type Properties = ChurnFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ChurnForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
