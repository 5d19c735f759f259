use common::error::TransportError;
use common::model::field::Field;
use common::model::prediction::PredictionResult;

pub enum Msg {
    UpdateField(Field, String),
    Submit,
    PredictionSettled(Result<PredictionResult, TransportError>),
}
