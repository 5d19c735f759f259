use crate::error::TransportError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the prediction service.
///
/// The service either reports an error in-band or answers with the churn
/// class and the probability of churn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Failure { error: String },
    Prediction {
        #[serde(deserialize_with = "churn_class")]
        prediction: u8,
        probability: f64,
    },
}

/// Accepts only the two classes the service can produce.
fn churn_class<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        class @ (0 | 1) => Ok(class),
        other => Err(D::Error::custom(format!("prediction must be 0 or 1, got {other}"))),
    }
}

impl PredictionResult {
    pub fn prediction(prediction: u8, probability: f64) -> Self {
        PredictionResult::Prediction {
            prediction,
            probability,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        PredictionResult::Failure {
            error: error.into(),
        }
    }

    /// Sorts an HTTP reply into a stored result or a transport failure.
    ///
    /// Any non-2xx status fails, even when the body carries an `{error}`
    /// object. A 2xx body must decode as a prediction or an in-band error.
    pub fn from_response(status: u16, body: &str) -> Result<Self, TransportError> {
        if !(200..300).contains(&status) {
            return Err(TransportError::Status(status));
        }
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// `Some(true)` when the customer is predicted to churn.
    pub fn churns(&self) -> Option<bool> {
        match self {
            PredictionResult::Prediction { prediction, .. } => Some(*prediction == 1),
            PredictionResult::Failure { .. } => None,
        }
    }

    /// Probability as a percentage with two decimals, e.g. `73.00%`.
    pub fn probability_percent(&self) -> Option<String> {
        match self {
            PredictionResult::Prediction { probability, .. } => {
                Some(format!("{:.2}%", probability * 100.0))
            }
            PredictionResult::Failure { .. } => None,
        }
    }
}
