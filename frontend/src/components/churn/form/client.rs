use common::error::TransportError;
use common::model::prediction::PredictionResult;
use common::requests::PredictRequest;
use gloo_net::http::Request;

/// Sends one prediction request. No retry, no timeout beyond the browser's.
///
/// Network failures come back as `TransportError::Network`; the status and
/// body are sorted by `PredictionResult::from_response`.
pub async fn predict(
    endpoint: &str,
    payload: &PredictRequest,
) -> Result<PredictionResult, TransportError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(payload)
        .map_err(|e| TransportError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    // An unreadable body decodes as empty, which fails for any 2xx reply.
    let body = response.text().await.unwrap_or_default();
    PredictionResult::from_response(status, &body)
}
