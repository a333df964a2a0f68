use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/health")
            .route("", web::get().to(health_check))
            .route("/config", web::get().to(get_config_status)),
    );
}

/// Liveness plus the running crate version
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Configured directories and whether they exist yet
async fn get_config_status(state: web::Data<AppState>) -> impl Responder {
    let store = state.store.config();

    HttpResponse::Ok().json(serde_json::json!({
        "metadata_dir": store.metadata_dir.to_string_lossy(),
        "metadata_dir_exists": store.metadata_dir.is_dir(),
        "asset_dir": store.asset_dir.to_string_lossy(),
        "asset_dir_exists": store.asset_dir.is_dir(),
        "image_base_path": store.image_base_path,
    }))
}
