//! Properties for the `ChurnForm` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChurnFormProps {
    /// Absolute or same-origin URL of the prediction endpoint. Resolved once
    /// by the `App` root and never changed afterwards.
    pub endpoint: AttrValue,
}
