use common::config::resolve_predict_url;

/// Resolves the prediction endpoint once, when the app mounts.
///
/// `index.html` may carry `<meta name="churn-api-url" content="...">`;
/// otherwise the `CHURN_API_URL` value captured at build time is used, and
/// finally the same-origin `/predict`.
pub fn predict_url() -> String {
    let page = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=\"churn-api-url\"]").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    resolve_predict_url(page.as_deref(), option_env!("CHURN_API_URL"))
}
