#![allow(dead_code)]

use std::sync::Arc;

use linkcut::application::services::{AuthService, LinkService};
use linkcut::infrastructure::persistence::MemoryLinkRepository;
use linkcut::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const BASE_URL: &str = "http://localhost:3000";

/// Builds application state backed by the in-memory repository, so tests
/// run without a database.
pub fn create_test_state() -> AppState {
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repository));
    let auth_service = Arc::new(AuthService::new(SIGNING_SECRET.to_string()));

    AppState::new(link_service, auth_service, BASE_URL.to_string())
}

/// Returns an `Authorization` header value carrying a valid credential
/// for `owner_id`.
pub fn bearer(state: &AppState, owner_id: &str) -> String {
    format!("Bearer {}", state.auth_service.issue_token(owner_id))
}
