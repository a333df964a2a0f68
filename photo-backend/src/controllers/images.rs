use actix_web::{web, HttpResponse};
use std::path::Path;

use crate::AppState;

/// URL prefix image files are served under
pub const IMAGES_ROUTE: &str = "/images";

/// Allowed image extensions for serving
const ALLOWED_EXTENSIONS: &[&str] = &["png", "svg", "jpg", "jpeg", "gif", "webp", "avif", "tiff"];

/// Get MIME type for an image extension
fn mime_for_ext(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

fn extension_of(filename: &str) -> String {
    filename.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Check if a filename has an allowed image extension
fn is_allowed_image(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension_of(filename).as_str())
}

/// Reject traversal, hidden segments and backslashes in a request path
fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && !path.contains('\\')
        && path
            .split('/')
            .all(|seg| !seg.is_empty() && seg != ".." && !seg.starts_with('.'))
}

/// Serve `/images/<slug>/<file>` from the asset directory
async fn serve_image(data: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let rel = path.into_inner();

    if !is_safe_relative(&rel) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid image path"
        }));
    }

    if !is_allowed_image(&rel) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only image files are served from /images/"
        }));
    }

    let dir = Path::new(&data.config.store.asset_dir);
    let file_path = dir.join(&rel);

    // Canonicalize and verify within asset dir
    let canonical_dir = match dir.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Image directory not found"
            }));
        }
    };

    let canonical_file = match file_path.canonicalize() {
        Ok(p) => p,
        Err(_) => {
            log::debug!(
                "[PHOTOS] {} is not found, root: {}",
                rel,
                canonical_dir.display()
            );
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "File not found"
            }));
        }
    };

    if !canonical_file.starts_with(&canonical_dir) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Access denied"
        }));
    }

    match tokio::fs::read(&canonical_file).await {
        Ok(contents) => HttpResponse::Ok()
            .content_type(mime_for_ext(&extension_of(&rel)))
            .append_header(("Cache-Control", "public, max-age=300"))
            .body(contents),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "File not found"
        })),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(IMAGES_ROUTE).route("/{path:.*}", web::get().to(serve_image)));
}
