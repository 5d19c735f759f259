mod model;
mod services;
mod settings;

use crate::model::ChurnModel;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = settings::load_settings();
    let url = settings.url();

    let model = match ChurnModel::load(&settings.model_path) {
        Ok(model) => model,
        Err(e) => {
            error!("Error loading model: {}", e);
            error!("Set CHURN_MODEL_PATH to an exported model artifact.");
            return Err(std::io::Error::other(e));
        }
    };
    info!(
        "Model loaded from {} ({} feature columns)",
        settings.model_path.display(),
        model.column_count()
    );
    let model = web::Data::new(model);

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser at {}: {}", url_clone, e);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(services::cors::headers())
            .app_data(model.clone())
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await
}
