use crate::error::ValidationError;
use crate::model::field::Field;
use crate::model::form::FormState;
use crate::model::number::parse_number;
use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
///
/// Built from a [`FormState`] that already passed
/// [`FormState::validate`]: `SeniorCitizen`, `tenure`, `MonthlyCharges` and
/// `TotalCharges` become numbers, a blank `TotalCharges` becomes `0.0`,
/// everything else is sent as typed. Conversion itself only fails when a
/// numeric field cannot be coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub gender: String,
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: u8,
    #[serde(rename = "Partner")]
    pub partner: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    pub tenure: f64,
    #[serde(rename = "PhoneService")]
    pub phone_service: String,
    #[serde(rename = "MultipleLines")]
    pub multiple_lines: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    #[serde(rename = "OnlineBackup")]
    pub online_backup: String,
    #[serde(rename = "DeviceProtection")]
    pub device_protection: String,
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
    #[serde(rename = "StreamingTV")]
    pub streaming_tv: String,
    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: String,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: String,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    #[serde(rename = "TotalCharges")]
    pub total_charges: f64,
}

impl TryFrom<&FormState> for PredictRequest {
    type Error = ValidationError;

    fn try_from(form: &FormState) -> Result<Self, Self::Error> {
        let text = |field: Field| form.get(field).to_string();
        let senior_citizen = match parse_number(form.get(Field::SeniorCitizen)) {
            Some(n) if n == 0.0 => 0,
            Some(n) if n == 1.0 => 1,
            _ => return Err(ValidationError::InvalidSeniorCitizen),
        };
        let tenure = parse_number(form.get(Field::Tenure)).ok_or(ValidationError::InvalidTenure)?;
        let monthly_charges = parse_number(form.get(Field::MonthlyCharges))
            .ok_or(ValidationError::InvalidMonthlyCharges)?;
        let total_charges = if form.is_blank(Field::TotalCharges) {
            0.0
        } else {
            parse_number(form.get(Field::TotalCharges)).ok_or(ValidationError::InvalidTotalCharges)?
        };

        Ok(PredictRequest {
            gender: text(Field::Gender),
            senior_citizen,
            partner: text(Field::Partner),
            dependents: text(Field::Dependents),
            tenure,
            phone_service: text(Field::PhoneService),
            multiple_lines: text(Field::MultipleLines),
            internet_service: text(Field::InternetService),
            online_security: text(Field::OnlineSecurity),
            online_backup: text(Field::OnlineBackup),
            device_protection: text(Field::DeviceProtection),
            tech_support: text(Field::TechSupport),
            streaming_tv: text(Field::StreamingTv),
            streaming_movies: text(Field::StreamingMovies),
            contract: text(Field::Contract),
            paperless_billing: text(Field::PaperlessBilling),
            payment_method: text(Field::PaymentMethod),
            monthly_charges,
            total_charges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::tests::sample_form;
    use serde_json::json;

    #[test]
    fn numeric_fields_are_sent_as_numbers() {
        let mut form = sample_form();
        form.update_field(Field::SeniorCitizen, "1");
        let payload = PredictRequest::try_from(&form).unwrap();
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["SeniorCitizen"], json!(1));
        assert_eq!(body["tenure"], json!(5.0));
        assert_eq!(body["MonthlyCharges"], json!(29.85));
        assert_eq!(body["TotalCharges"], json!(150.75));
        assert_eq!(body["gender"], json!("Female"));
        assert_eq!(body["StreamingTV"], json!(""));
    }

    #[test]
    fn total_charges_parses_decimal_text() {
        let mut form = sample_form();
        form.update_field(Field::TotalCharges, "45.30");
        let payload = PredictRequest::try_from(&form).unwrap();
        assert_eq!(payload.total_charges, 45.30);
    }

    #[test]
    fn blank_total_charges_defaults_to_zero() {
        let mut form = sample_form();
        form.update_field(Field::TotalCharges, "");
        let payload = PredictRequest::try_from(&form).unwrap();
        assert_eq!(payload.total_charges, 0.0);
    }

    #[test]
    fn whitespace_total_charges_defaults_to_zero() {
        let mut form = sample_form();
        form.update_field(Field::TotalCharges, " ");
        let payload = PredictRequest::try_from(&form).unwrap();
        assert_eq!(payload.total_charges, 0.0);
    }

    #[test]
    fn senior_citizen_outside_zero_one_is_rejected() {
        let mut form = sample_form();
        form.update_field(Field::SeniorCitizen, "2");
        assert_eq!(
            PredictRequest::try_from(&form),
            Err(ValidationError::InvalidSeniorCitizen)
        );
    }

    #[test]
    fn payload_has_every_field_key() {
        let body = serde_json::to_value(PredictRequest::try_from(&sample_form()).unwrap()).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
    }
}
