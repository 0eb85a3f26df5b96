//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Destination URL to shorten.
    pub original_url: String,

    /// Optional custom short code; a random one is generated when absent.
    pub short_code: Option<String>,
}

/// Request body for `PUT /api/links/{id}`.
///
/// Both fields are required; the update replaces the link's mutable
/// fields wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    pub original_url: String,
    pub short_code: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response representation, deriving `short_url` from the
    /// configured public base URL.
    pub fn from_link(link: Link, public_base_url: &str) -> Self {
        let short_url = format!(
            "{}/l/{}",
            public_base_url.trim_end_matches('/'),
            link.short_code
        );

        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response body for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}
