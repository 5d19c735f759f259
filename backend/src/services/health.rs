use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource, Responder};

pub fn configure_routes() -> Resource {
    resource("/health").route(get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("✅ Telco Churn Prediction API is running!")
}
