//! # Churn Model
//!
//! Loads the exported model artifact and turns a raw customer record into a
//! churn prediction.
//!
//! The artifact is a JSON document holding everything the training pipeline
//! produced:
//!
//! ```json
//! {
//!   "columns": ["SeniorCitizen", "tenure", "gender_Female", "..."],
//!   "scaler": { "columns": ["tenure", "..."], "mean": [32.4], "scale": [24.6] },
//!   "intercept": -1.6,
//!   "coefficients": [0.2, -1.3, 0.0],
//!   "threshold": 0.5
//! }
//! ```
//!
//! ## Preprocessing
//! A record is encoded the same way the training frame was:
//! - `tenure`, `MonthlyCharges` and `TotalCharges` are coerced to numbers,
//!   anything unreadable counting as `0`.
//! - String values are one-hot encoded as `<key>_<value>` columns; other
//!   numbers keep their own column name.
//! - The result is reindexed onto `columns` (unknown keys dropped, missing
//!   columns `0`) and the scaler columns are standardised.

use common::model::number::parse_number;
use common::model::prediction::PredictionResult;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns coerced to numbers before encoding.
pub const NUMERIC_COLUMNS: [&str; 3] = ["tenure", "MonthlyCharges", "TotalCharges"];

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("inconsistent model artifact: {0}")]
    Shape(String),
    #[error("{0}")]
    Input(String),
}

#[derive(Debug, Deserialize)]
struct Artifact {
    columns: Vec<String>,
    scaler: ScalerArtifact,
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    columns: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

fn default_threshold() -> f64 {
    0.5
}

/// Standardisation of one feature column.
#[derive(Debug, Clone, PartialEq)]
struct Standardize {
    column: usize,
    mean: f64,
    scale: f64,
}

/// Logistic churn classifier over one-hot encoded customer records.
///
/// Immutable once loaded; shared between workers as `web::Data`.
#[derive(Debug)]
pub struct ChurnModel {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    scaler: Vec<Standardize>,
    intercept: f64,
    coefficients: Vec<f64>,
    threshold: f64,
}

impl ChurnModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(raw).map_err(ModelError::Decode)?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: Artifact) -> Result<Self, ModelError> {
        if artifact.columns.is_empty() {
            return Err(ModelError::Shape("no feature columns".into()));
        }
        if artifact.coefficients.len() != artifact.columns.len() {
            return Err(ModelError::Shape(format!(
                "{} coefficients for {} columns",
                artifact.coefficients.len(),
                artifact.columns.len()
            )));
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(ModelError::Shape(format!(
                "threshold {} outside [0, 1]",
                artifact.threshold
            )));
        }

        let mut index = HashMap::with_capacity(artifact.columns.len());
        for (i, column) in artifact.columns.iter().enumerate() {
            if index.insert(column.clone(), i).is_some() {
                return Err(ModelError::Shape(format!("duplicate column {column}")));
            }
        }

        let ScalerArtifact {
            columns: scaled,
            mean,
            scale,
        } = artifact.scaler;
        if scaled.len() != mean.len() || scaled.len() != scale.len() {
            return Err(ModelError::Shape(
                "scaler columns, mean and scale differ in length".into(),
            ));
        }
        let mut scaler = Vec::with_capacity(scaled.len());
        for ((name, mean), scale) in scaled.iter().zip(mean).zip(scale) {
            let column = *index
                .get(name)
                .ok_or_else(|| ModelError::Shape(format!("scaler column {name} is not a feature")))?;
            if scale == 0.0 || !scale.is_finite() {
                return Err(ModelError::Shape(format!("scaler column {name} has scale {scale}")));
            }
            scaler.push(Standardize { column, mean, scale });
        }

        Ok(Self {
            columns: artifact.columns,
            index,
            scaler,
            intercept: artifact.intercept,
            coefficients: artifact.coefficients,
            threshold: artifact.threshold,
        })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Encodes `record` into the model's feature vector.
    pub fn features(&self, record: &Value) -> Result<Vec<f64>, ModelError> {
        let record = record
            .as_object()
            .ok_or_else(|| ModelError::Input("expected a JSON object".into()))?;

        let mut features = vec![0.0; self.columns.len()];
        for (key, value) in record {
            if NUMERIC_COLUMNS.contains(&key.as_str()) {
                self.set(&mut features, key, coerce_number(value));
                continue;
            }
            match value {
                Value::String(s) => self.set(&mut features, &format!("{key}_{s}"), 1.0),
                Value::Number(n) => self.set(&mut features, key, n.as_f64().unwrap_or(0.0)),
                Value::Bool(b) => self.set(&mut features, key, f64::from(u8::from(*b))),
                Value::Null => {}
                Value::Array(_) | Value::Object(_) => {
                    return Err(ModelError::Input(format!("field {key} must be a scalar")));
                }
            }
        }

        for s in &self.scaler {
            features[s.column] = (features[s.column] - s.mean) / s.scale;
        }
        Ok(features)
    }

    pub fn predict(&self, record: &Value) -> Result<PredictionResult, ModelError> {
        let features = self.features(record)?;
        let logit = self.intercept
            + features
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>();
        let probability = 1.0 / (1.0 + (-logit).exp());
        let prediction = u8::from(probability >= self.threshold);
        Ok(PredictionResult::prediction(prediction, probability))
    }

    fn set(&self, features: &mut [f64], column: &str, value: f64) {
        if let Some(&i) = self.index.get(column) {
            features[i] = value;
        }
    }
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number(s).unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

/// Parses a request body the way the endpoint accepts it: any JSON value,
/// whatever the declared content type.
pub fn parse_record(body: &[u8]) -> Result<Value, ModelError> {
    serde_json::from_slice(body).map_err(|e| ModelError::Input(format!("invalid JSON body: {e}")))
}
