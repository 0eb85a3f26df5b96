//! API route configuration.
//!
//! All management endpoints require Bearer credential authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All management routes, protected by Bearer credential authentication.
///
/// # Endpoints
///
/// - `GET    /links`      - List the caller's links
/// - `POST   /links`      - Create a link
/// - `PUT    /links/{id}` - Replace a link's destination and short code
/// - `DELETE /links/{id}` - Delete a link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            put(update_link_handler).delete(delete_link_handler),
        )
}
