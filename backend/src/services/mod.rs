//! # HTTP Services
//!
//! - `predict`: `POST /predict`, the churn prediction endpoint.
//! - `health`: `GET /health`, liveness text.
//! - `cors`: permissive cross-origin headers and preflight answers, so a
//!   frontend served from another origin can call `/predict`.
//!
//! Everything else falls through to the embedded frontend bundle configured
//! in `main.rs`.

pub mod cors;
mod health;
mod predict;

use actix_web::web;

/// Registers all API routes. The preflight route goes first so that
/// `OPTIONS` never reaches the resources below.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", cors::preflight_route())
        .service(health::configure_routes())
        .service(predict::configure_routes());
}
