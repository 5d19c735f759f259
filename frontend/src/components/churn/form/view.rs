//! View rendering for the churn form component.
//!
//! Select inputs come first, in the order of `Field::SELECTS`, each with a
//! leading empty "Select" option; the three numeric inputs follow. The
//! result panel sits under the form and renders nothing until a prediction
//! is stored.

use common::model::field::Field;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ChurnForm;
use crate::components::churn::result::ResultPanel;

pub fn view(component: &ChurnForm, ctx: &Context<ChurnForm>) -> Html {
    let link = ctx.link();
    let loading = component.controller.is_loading();

    html! {
        <div class="app">
            <h1>{"Telco Customer Churn Predictor"}</h1>
            <form
                class="churn-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-grid">
                    { for Field::SELECTS.into_iter().map(|field| build_select(component, link, field)) }
                    { for Field::NUMBERS.into_iter().map(|field| build_number_input(component, link, field)) }
                </div>

                <button type="submit" disabled={loading}>
                    { if loading { "Predicting..." } else { "Predict Churn" } }
                </button>
            </form>

            <ResultPanel result={component.controller.result().cloned()} />
        </div>
    }
}

fn build_select(component: &ChurnForm, link: &Scope<ChurnForm>, field: Field) -> Html {
    let current = component.controller.value(field).to_string();
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateField(field, select.value())
    });

    html! {
        <div class="form-field" key={field.name()}>
            <label for={field.name()}>{ field.label() }</label>
            <select id={field.name()} name={field.name()} {onchange}>
                <option value="" selected={current.is_empty()}>{"Select"}</option>
                { for field.options().into_iter().map(|(value, caption)| html! {
                    <option value={value} selected={current == value}>{ caption }</option>
                }) }
            </select>
        </div>
    }
}

fn build_number_input(component: &ChurnForm, link: &Scope<ChurnForm>, field: Field) -> Html {
    let step = if field == Field::Tenure { "1" } else { "0.01" };
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });

    html! {
        <div class="form-field" key={field.name()}>
            <label for={field.name()}>{ field.label() }</label>
            <input
                id={field.name()}
                name={field.name()}
                type="number"
                min="0"
                step={step}
                value={component.controller.value(field).to_string()}
                {oninput}
            />
        </div>
    }
}
