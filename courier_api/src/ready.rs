use axum::http::Uri;

use crate::error::ApiError;

pub const READY_MARKER: &str = "ready";

pub async fn ready_handler() -> &'static str {
    READY_MARKER
}

pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
