mod files;
mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::types::AppError;

/// Creates the router with all handler routes
///
/// Unmatched paths and unmatched methods on known paths both resolve to
/// the same 404 JSON body, so e.g. `DELETE /files` is a 404 rather than
/// a 405.
pub fn handler() -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route("/files", post(files::create_upload_url))
        .route("/files/", get(files::missing_object_key))
        .route("/files/{*object_key}", get(files::redirect_to_download_url))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::not_found()
}
