//! Handlers for link management endpoints (list, create, update, delete).

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::{
    CreateLinkRequest, LinkListResponse, LinkResponse, UpdateLinkRequest,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's links, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links(&owner_id).await?;

    let links = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.public_base_url))
        .collect();

    Ok(Json(LinkListResponse { links }))
}

/// Creates a short link owned by the caller.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "short_code": "my-link"   // optional; generated when absent
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict when the
/// short code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .link_service
        .create_link(&owner_id, payload.original_url, payload.short_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.public_base_url)),
    ))
}

/// Replaces both mutable fields of one of the caller's links.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no link matches the id for this caller —
/// deliberately the same outcome whether the link is missing or owned by
/// someone else. Returns 409 Conflict when the new code is taken.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .update_link(&owner_id, id, payload.original_url, payload.short_code)
        .await?;

    Ok(Json(LinkResponse::from_link(link, &state.public_base_url)))
}

/// Deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no link matches the id for this caller.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&owner_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
