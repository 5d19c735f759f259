use crate::components::churn::form::ChurnForm;
use crate::config::predict_url;
use gloo_console::log;
use yew::{html, AttrValue, Component, Context, Html};

pub struct App {
    endpoint: AttrValue,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let endpoint = predict_url();
        log!("Prediction endpoint:", endpoint.clone());
        Self {
            endpoint: AttrValue::from(endpoint),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ChurnForm endpoint={self.endpoint.clone()} />
            </div>
        }
    }
}
