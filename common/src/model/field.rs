use std::fmt;

const YES_NO: &[&str] = &["No", "Yes"];
const INTERNET_ADDON: &[&str] = &["No", "No internet service", "Yes"];

/// One input of the churn form.
///
/// The variant order is the order of the payload columns. `name()` gives the
/// exact key used on the wire, which is also what the prediction service was
/// trained on, so it must never be translated or re-cased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Gender,
    SeniorCitizen,
    Partner,
    Dependents,
    Tenure,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
    MonthlyCharges,
    TotalCharges,
}

/// How a field is entered in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A select restricted to the listed options.
    Choice(&'static [&'static str]),
    /// The `0`/`1` senior citizen select.
    Flag,
    /// Free numeric input.
    Number,
}

impl Field {
    pub const ALL: [Field; 19] = [
        Field::Gender,
        Field::SeniorCitizen,
        Field::Partner,
        Field::Dependents,
        Field::Tenure,
        Field::PhoneService,
        Field::MultipleLines,
        Field::InternetService,
        Field::OnlineSecurity,
        Field::OnlineBackup,
        Field::DeviceProtection,
        Field::TechSupport,
        Field::StreamingTv,
        Field::StreamingMovies,
        Field::Contract,
        Field::PaperlessBilling,
        Field::PaymentMethod,
        Field::MonthlyCharges,
        Field::TotalCharges,
    ];

    /// Fields that must be non-empty before a submission, in the order they
    /// are checked.
    pub const REQUIRED: [Field; 12] = [
        Field::Gender,
        Field::SeniorCitizen,
        Field::Partner,
        Field::Dependents,
        Field::Tenure,
        Field::PhoneService,
        Field::InternetService,
        Field::Contract,
        Field::MonthlyCharges,
        Field::TotalCharges,
        Field::PaperlessBilling,
        Field::PaymentMethod,
    ];

    /// Select fields in the order the form lays them out.
    pub const SELECTS: [Field; 16] = [
        Field::Gender,
        Field::SeniorCitizen,
        Field::Partner,
        Field::Dependents,
        Field::PhoneService,
        Field::MultipleLines,
        Field::InternetService,
        Field::OnlineSecurity,
        Field::OnlineBackup,
        Field::DeviceProtection,
        Field::TechSupport,
        Field::StreamingTv,
        Field::StreamingMovies,
        Field::Contract,
        Field::PaperlessBilling,
        Field::PaymentMethod,
    ];

    /// Numeric inputs, rendered after the selects.
    pub const NUMBERS: [Field; 3] = [Field::Tenure, Field::MonthlyCharges, Field::TotalCharges];

    pub fn name(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::SeniorCitizen => "SeniorCitizen",
            Field::Partner => "Partner",
            Field::Dependents => "Dependents",
            Field::Tenure => "tenure",
            Field::PhoneService => "PhoneService",
            Field::MultipleLines => "MultipleLines",
            Field::InternetService => "InternetService",
            Field::OnlineSecurity => "OnlineSecurity",
            Field::OnlineBackup => "OnlineBackup",
            Field::DeviceProtection => "DeviceProtection",
            Field::TechSupport => "TechSupport",
            Field::StreamingTv => "StreamingTV",
            Field::StreamingMovies => "StreamingMovies",
            Field::Contract => "Contract",
            Field::PaperlessBilling => "PaperlessBilling",
            Field::PaymentMethod => "PaymentMethod",
            Field::MonthlyCharges => "MonthlyCharges",
            Field::TotalCharges => "TotalCharges",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::SeniorCitizen => "Senior Citizen (0 = No, 1 = Yes)",
            Field::Partner => "Partner",
            Field::Dependents => "Dependents",
            Field::Tenure => "Tenure (months)",
            Field::PhoneService => "Phone Service",
            Field::MultipleLines => "Multiple Lines",
            Field::InternetService => "Internet Service",
            Field::OnlineSecurity => "Online Security",
            Field::OnlineBackup => "Online Backup",
            Field::DeviceProtection => "Device Protection",
            Field::TechSupport => "Tech Support",
            Field::StreamingTv => "Streaming TV",
            Field::StreamingMovies => "Streaming Movies",
            Field::Contract => "Contract",
            Field::PaperlessBilling => "Paperless Billing",
            Field::PaymentMethod => "Payment Method",
            Field::MonthlyCharges => "Monthly Charges ($)",
            Field::TotalCharges => "Total Charges ($)",
        }
    }

    /// The static schema entry for this field.
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Gender => FieldKind::Choice(&["Female", "Male"]),
            Field::SeniorCitizen => FieldKind::Flag,
            Field::Partner | Field::Dependents | Field::PhoneService | Field::PaperlessBilling => {
                FieldKind::Choice(YES_NO)
            }
            Field::MultipleLines => FieldKind::Choice(&["No", "No phone service", "Yes"]),
            Field::InternetService => FieldKind::Choice(&["DSL", "Fiber optic", "No"]),
            Field::OnlineSecurity
            | Field::OnlineBackup
            | Field::DeviceProtection
            | Field::TechSupport
            | Field::StreamingTv
            | Field::StreamingMovies => FieldKind::Choice(INTERNET_ADDON),
            Field::Contract => FieldKind::Choice(&["Month-to-month", "One year", "Two year"]),
            Field::PaymentMethod => FieldKind::Choice(&[
                "Bank transfer (automatic)",
                "Credit card (automatic)",
                "Electronic check",
                "Mailed check",
            ]),
            Field::Tenure | Field::MonthlyCharges | Field::TotalCharges => FieldKind::Number,
        }
    }

    /// Allowed `(value, caption)` pairs for select fields, empty for numeric
    /// inputs.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self.kind() {
            FieldKind::Choice(values) => values.iter().map(|v| (*v, *v)).collect(),
            FieldKind::Flag => vec![("0", "0 - No"), ("1", "1 - Yes")],
            FieldKind::Number => Vec::new(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
