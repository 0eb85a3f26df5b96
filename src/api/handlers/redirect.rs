//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /l/{code}`
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` set to the stored URL
/// - **404 Not Found** with a plain-text body when the code is unknown
/// - **500 Internal Server Error** with a plain-text body on storage failure
///
/// This is the public path: no identity is involved, and the error bodies
/// are plain text rather than the API's JSON envelope.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(original_url) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, original_url)]).into_response()
        }
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Link not found").into_response()
        }
        Err(e) => {
            error!("Error redirecting link: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
