//! Read-only panel showing the last prediction.

use common::model::prediction::PredictionResult;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    /// `None` while no prediction is stored, including during a submission.
    #[prop_or_default]
    pub result: Option<PredictionResult>,
}

pub struct ResultPanel;

impl Component for ResultPanel {
    type Message = ();
    type Properties = ResultPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResultPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(result) = &ctx.props().result else {
            return html! {};
        };

        match result {
            PredictionResult::Failure { error } => html! {
                <div class="result">
                    <div class="error">{ format!("Error: {}", error) }</div>
                </div>
            },
            PredictionResult::Prediction { .. } => {
                let churn = if result.churns() == Some(true) {
                    "⚠️ Yes (Customer likely to churn)"
                } else {
                    "✅ No (Customer likely to stay)"
                };
                html! {
                    <div class="result">
                        <h2>{"Prediction Result"}</h2>
                        <p>
                            <strong>{"Churn:"}</strong>{" "}{ churn }
                        </p>
                        <p>
                            <strong>{"Probability:"}</strong>{" "}
                            { result.probability_percent().unwrap_or_default() }
                        </p>
                    </div>
                }
            }
        }
    }
}
