//! Form controller: the single owner of the form values, the last
//! prediction and the loading flag.
//!
//! A submission is split in two so that an event loop can run the network
//! call without borrowing the controller across the await:
//!
//! 1. [`FormController::begin_submission`] validates, flips the loading flag,
//!    clears the previous result and hands back the payload to POST.
//! 2. [`FormController::finish_submission`] stores the outcome, clears the
//!    loading flag and returns the one notice the user should see.

use crate::error::{TransportError, ValidationError};
use crate::model::field::Field;
use crate::model::form::FormState;
use crate::model::prediction::PredictionResult;
use crate::requests::PredictRequest;

pub const SUCCESS_MESSAGE: &str = "✅ Prediction received!";
pub const FAILURE_MESSAGE: &str = "⚠️ API connection failed. Check console or CORS settings.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        Notice::error(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: FormState,
    result: Option<PredictionResult>,
    loading: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.form.validate()
    }

    /// Starts a submission. On a validation failure nothing changes and the
    /// caller must not send anything.
    pub fn begin_submission(&mut self) -> Result<PredictRequest, ValidationError> {
        self.form.validate()?;
        let payload = PredictRequest::try_from(&self.form)?;
        self.loading = true;
        self.result = None;
        Ok(payload)
    }

    /// Settles the submission started by [`begin_submission`](Self::begin_submission).
    pub fn finish_submission(
        &mut self,
        outcome: Result<PredictionResult, TransportError>,
    ) -> Notice {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Notice::success(SUCCESS_MESSAGE)
            }
            Err(_) => Notice::error(FAILURE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::tests::sample_form;
    use serde_json::json;

    fn filled_controller() -> FormController {
        let sample = sample_form();
        let mut controller = FormController::new();
        for field in Field::ALL {
            controller.update_field(field, sample.get(field));
        }
        controller
    }

    #[test]
    fn validation_failure_leaves_state_untouched() {
        let mut controller = filled_controller();
        controller.finish_submission(Ok(PredictionResult::prediction(0, 0.2)));
        controller.update_field(Field::Tenure, "-1");

        let err = controller.begin_submission().unwrap_err();
        assert_eq!(err, ValidationError::InvalidTenure);
        assert_eq!(err.field(), Field::Tenure);
        assert_eq!(Notice::from(&err), Notice::error("Tenure must be a non-negative integer"));
        assert!(!controller.is_loading());
        assert_eq!(controller.result(), Some(&PredictionResult::prediction(0, 0.2)));
    }

    #[test]
    fn successful_round_trip_stores_the_prediction() {
        let mut controller = filled_controller();
        assert_eq!(controller.validate(), Ok(()));

        let payload = controller.begin_submission().unwrap();
        assert!(controller.is_loading());
        assert_eq!(controller.result(), None);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            body,
            json!({
                "gender": "Female",
                "SeniorCitizen": 0,
                "Partner": "Yes",
                "Dependents": "No",
                "tenure": 5.0,
                "PhoneService": "Yes",
                "MultipleLines": "",
                "InternetService": "DSL",
                "OnlineSecurity": "",
                "OnlineBackup": "",
                "DeviceProtection": "",
                "TechSupport": "",
                "StreamingTV": "",
                "StreamingMovies": "",
                "Contract": "Month-to-month",
                "PaperlessBilling": "Yes",
                "PaymentMethod": "Electronic check",
                "MonthlyCharges": 29.85,
                "TotalCharges": 150.75
            })
        );

        let response: PredictionResult =
            serde_json::from_value(json!({"prediction": 1, "probability": 0.73})).unwrap();
        let notice = controller.finish_submission(Ok(response));

        assert_eq!(notice, Notice::success(SUCCESS_MESSAGE));
        assert!(!controller.is_loading());
        assert_eq!(controller.result(), Some(&PredictionResult::prediction(1, 0.73)));
    }

    #[test]
    fn network_failure_leaves_result_unset() {
        let mut controller = filled_controller();
        controller.begin_submission().unwrap();

        let notice = controller.finish_submission(Err(TransportError::Network(
            "connection refused".to_string(),
        )));

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, FAILURE_MESSAGE);
        assert!(!controller.is_loading());
        assert_eq!(controller.result(), None);
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut controller = filled_controller();
        controller.begin_submission().unwrap();
        controller.finish_submission(Ok(PredictionResult::failure("model offline")));
        assert!(controller.result().is_some());

        controller.begin_submission().unwrap();
        assert_eq!(controller.result(), None);
        controller.finish_submission(Err(TransportError::Status(502)));
        assert_eq!(controller.result(), None);
    }

    #[test]
    fn in_band_error_body_counts_as_success() {
        let mut controller = filled_controller();
        controller.begin_submission().unwrap();
        let notice = controller.finish_submission(Ok(PredictionResult::failure("bad input")));
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(controller.result(), Some(&PredictionResult::failure("bad input")));
    }
}
