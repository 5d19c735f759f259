use crate::model::field::Field;
use thiserror::Error;

/// A form value that blocks submission. The `Display` text is shown to the
/// user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill {0}")]
    Missing(Field),
    #[error("Tenure must be a non-negative integer")]
    InvalidTenure,
    #[error("MonthlyCharges must be a number")]
    InvalidMonthlyCharges,
    #[error("TotalCharges must be a number (or leave blank)")]
    InvalidTotalCharges,
    #[error("SeniorCitizen must be 0 or 1")]
    InvalidSeniorCitizen,
}

impl ValidationError {
    /// The field the user has to correct.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::InvalidTenure => Field::Tenure,
            ValidationError::InvalidMonthlyCharges => Field::MonthlyCharges,
            ValidationError::InvalidTotalCharges => Field::TotalCharges,
            ValidationError::InvalidSeniorCitizen => Field::SeniorCitizen,
        }
    }
}

/// Anything that went wrong between sending the payload and holding a
/// decoded prediction. All variants are reported to the user the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("prediction service answered with status {0}")]
    Status(u16),
    #[error("could not decode prediction response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_uses_the_wire_name() {
        let err = ValidationError::Missing(Field::StreamingTv);
        assert_eq!(err.to_string(), "Please fill StreamingTV");
        assert_eq!(err.field(), Field::StreamingTv);
    }

    #[test]
    fn numeric_errors_point_at_their_field() {
        assert_eq!(ValidationError::InvalidTenure.field(), Field::Tenure);
        assert_eq!(ValidationError::InvalidTotalCharges.field(), Field::TotalCharges);
    }
}
