use crate::model::{parse_record, ChurnModel, ModelError};
use actix_web::web::{self, post, resource};
use actix_web::{HttpResponse, Resource};
use common::model::prediction::PredictionResult;
use log::error;

/// `POST /predict`
///
/// The body is read as JSON whatever its content type. A prediction is
/// answered with `200 {prediction, probability}`; any failure with
/// `500 {error}`.
pub fn configure_routes() -> Resource {
    resource("/predict").route(post().to(process))
}

async fn process(body: web::Bytes, model: web::Data<ChurnModel>) -> HttpResponse {
    match predict(&body, &model) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(PredictionResult::failure(e.to_string()))
        }
    }
}

fn predict(body: &[u8], model: &ChurnModel) -> Result<PredictionResult, ModelError> {
    let record = parse_record(body)?;
    model.predict(&record)
}
