//! Photos REST API — list, read and update photo metadata.

use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use photo_types::{ErrorResponse, PhotoPatch, UpdateResponse};

use crate::error::PhotoStoreError;
use crate::AppState;

/// List all photos, newest first
async fn list_photos(data: web::Data<AppState>) -> impl Responder {
    match data.store.list_photos().await {
        Ok(photos) => HttpResponse::Ok().json(photos),
        Err(e) => {
            log::error!("[PHOTOS] Error fetching photo metadata: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch photo metadata."))
        }
    }
}

/// Read one photo's frontmatter as stored, including keys outside the schema
async fn get_photo(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match data.store.get_photo(&slug).await {
        Ok(photo) => HttpResponse::Ok().json(photo),
        Err(e) => {
            log::error!("[PHOTOS] Error fetching metadata for {}: {}", slug, e);
            match e {
                PhotoStoreError::NotFound(_) | PhotoStoreError::Frontmatter { .. } => {
                    HttpResponse::NotFound().json(ErrorResponse::new("Metadata not found."))
                }
                _ => HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to fetch photo metadata.")),
            }
        }
    }
}

/// Update a photo's frontmatter and/or body, renaming it if the slug changes
async fn update_photo(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PhotoPatch>,
) -> impl Responder {
    let slug = path.into_inner();
    let patch = body.into_inner();

    match data.store.update_photo(&slug, &patch).await {
        Ok(outcome) => HttpResponse::Ok().json(UpdateResponse {
            message: format!("Metadata for {} updated successfully.", outcome.slug),
            slug: outcome.slug,
            src_path: outcome.src_path,
        }),
        Err(PhotoStoreError::InvalidPatch(msg)) => {
            log::warn!("[PHOTOS] Rejected update for {}: {}", slug, msg);
            HttpResponse::BadRequest().json(ErrorResponse::new(msg))
        }
        Err(e) => {
            log::error!("[PHOTOS] Error updating metadata for {}: {}", slug, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to update metadata for {}.",
                slug
            )))
        }
    }
}

/// Malformed or schema-violating JSON bodies become a 400 with an `error` field
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid photo payload: {}", err);
    log::warn!("[PHOTOS] {}", message);
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message)))
        .into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/photos")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::get().to(list_photos))
            .route("/{slug}", web::get().to(get_photo))
            .route("/{slug}", web::post().to(update_photo)),
    );
}
