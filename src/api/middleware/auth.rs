//! Bearer credential authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Verified caller identity, inserted as a request extension.
///
/// Handlers extract this and thread the owner id explicitly into every
/// service call. The extension is only present behind [`layer`], so an
/// unauthenticated request can never reach an owner-scoped handler.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

/// Authenticates requests using Bearer credentials from the Authorization
/// header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <owner_id>.<signature>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the credential from the `Authorization` header
/// 2. Verify the signature via
///    [`crate::application::services::AuthService`]
/// 3. Insert the recovered owner id as a [`CurrentUser`] extension
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Credential format is invalid
/// - Signature verification fails
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let owner_id = st.auth_service.verify_token(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(owner_id));

    Ok(next.run(req).await)
}
