use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    /// Base URL short links are served from, e.g. `https://lc.example.com`.
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        public_base_url: String,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            public_base_url,
        }
    }
}
