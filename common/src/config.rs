/// Endpoint used when neither the page nor the build names one. Relative, so
/// it hits the backend that served the bundle.
pub const DEFAULT_PREDICT_URL: &str = "/predict";

/// Picks the prediction endpoint from, in order, the page configuration
/// (a `<meta name="churn-api-url">` tag), the build-time `CHURN_API_URL`
/// value, then [`DEFAULT_PREDICT_URL`]. Blank candidates are skipped.
pub fn resolve_predict_url(page: Option<&str>, build: Option<&str>) -> String {
    [page, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PREDICT_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_configuration_wins() {
        assert_eq!(
            resolve_predict_url(Some("https://churn.example/predict"), Some("http://127.0.0.1:5000/predict")),
            "https://churn.example/predict"
        );
    }

    #[test]
    fn build_value_is_used_when_page_is_blank() {
        assert_eq!(
            resolve_predict_url(Some("  "), Some("http://127.0.0.1:5000/predict")),
            "http://127.0.0.1:5000/predict"
        );
    }

    #[test]
    fn falls_back_to_same_origin() {
        assert_eq!(resolve_predict_url(None, None), DEFAULT_PREDICT_URL);
        assert_eq!(resolve_predict_url(None, Some("")), DEFAULT_PREDICT_URL);
    }
}
