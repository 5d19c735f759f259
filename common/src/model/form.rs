//! The raw form contents and the rules a form must pass before it may be
//! submitted.

use crate::error::ValidationError;
use crate::model::field::Field;
use crate::model::number::parse_number;
use std::collections::BTreeMap;

/// Current text of every form input. A missing entry and an empty string
/// both mean "unset"; values stay strings until the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`. No validation happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// The value of `field`, or `""` when it was never set.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).is_empty()
    }

    /// Checks required fields in order, then the numeric constraints.
    ///
    /// Stops at the first problem: a missing field hides any later missing
    /// field, and numeric checks only run once every required field is set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::REQUIRED.into_iter().find(|f| self.is_blank(*f)) {
            return Err(ValidationError::Missing(field));
        }

        match parse_number(self.get(Field::Tenure)) {
            Some(tenure) if tenure >= 0.0 => {}
            _ => return Err(ValidationError::InvalidTenure),
        }

        if parse_number(self.get(Field::MonthlyCharges)).is_none() {
            return Err(ValidationError::InvalidMonthlyCharges);
        }

        if !self.is_blank(Field::TotalCharges) && parse_number(self.get(Field::TotalCharges)).is_none() {
            return Err(ValidationError::InvalidTotalCharges);
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The sample customer used throughout the tests.
    pub(crate) fn sample_form() -> FormState {
        let mut form = FormState::new();
        for (field, value) in [
            (Field::Gender, "Female"),
            (Field::SeniorCitizen, "0"),
            (Field::Partner, "Yes"),
            (Field::Dependents, "No"),
            (Field::Tenure, "5"),
            (Field::PhoneService, "Yes"),
            (Field::InternetService, "DSL"),
            (Field::Contract, "Month-to-month"),
            (Field::MonthlyCharges, "29.85"),
            (Field::TotalCharges, "150.75"),
            (Field::PaperlessBilling, "Yes"),
            (Field::PaymentMethod, "Electronic check"),
        ] {
            form.update_field(field, value);
        }
        form
    }

    #[test]
    fn sample_form_is_valid() {
        assert_eq!(sample_form().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_gender_first() {
        assert_eq!(
            FormState::new().validate(),
            Err(ValidationError::Missing(Field::Gender))
        );
    }

    #[test]
    fn each_missing_required_field_is_named() {
        for field in Field::REQUIRED {
            let mut form = sample_form();
            form.update_field(field, "");
            assert_eq!(form.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn first_missing_field_wins_in_required_order() {
        let mut form = sample_form();
        form.update_field(Field::PaymentMethod, "");
        form.update_field(Field::Dependents, "");
        form.update_field(Field::Contract, "");
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::Dependents)));
    }

    #[test]
    fn missing_field_is_reported_before_bad_numbers() {
        let mut form = sample_form();
        form.update_field(Field::Tenure, "abc");
        form.update_field(Field::PaymentMethod, "");
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::PaymentMethod)));
    }

    #[test]
    fn optional_fields_may_stay_blank() {
        let form = sample_form();
        assert!(form.is_blank(Field::MultipleLines));
        assert!(form.is_blank(Field::StreamingMovies));
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn tenure_rejects_negative_and_non_numeric() {
        for bad in ["-1", "-0.5", "abc"] {
            let mut form = sample_form();
            form.update_field(Field::Tenure, bad);
            assert_eq!(form.validate(), Err(ValidationError::InvalidTenure), "tenure {bad}");
        }
    }

    #[test]
    fn tenure_accepts_zero_positive_and_fractions() {
        for good in ["0", "12", "2.5"] {
            let mut form = sample_form();
            form.update_field(Field::Tenure, good);
            assert_eq!(form.validate(), Ok(()), "tenure {good}");
        }
    }

    #[test]
    fn monthly_charges_must_be_numeric_but_may_be_negative() {
        let mut form = sample_form();
        form.update_field(Field::MonthlyCharges, "twenty");
        assert_eq!(form.validate(), Err(ValidationError::InvalidMonthlyCharges));

        form.update_field(Field::MonthlyCharges, "-3");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn total_charges_must_be_numeric() {
        let mut form = sample_form();
        form.update_field(Field::TotalCharges, "n/a");
        assert_eq!(form.validate(), Err(ValidationError::InvalidTotalCharges));
    }

    #[test]
    fn update_field_is_idempotent() {
        let mut form = sample_form();
        form.update_field(Field::Contract, "Two year");
        let once = form.clone();
        form.update_field(Field::Contract, "Two year");
        assert_eq!(form, once);
        assert_eq!(form.get(Field::Contract), "Two year");
    }
}
