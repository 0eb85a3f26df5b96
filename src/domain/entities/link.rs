//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL owned by an authenticated user.
///
/// Maps a globally unique short code to a destination URL. The `owner_id`
/// is set at creation and never changes; all mutations are scoped to it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub owner_id: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        owner_id: String,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            original_url,
            short_code,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub owner_id: String,
    pub original_url: String,
    pub short_code: String,
}

/// Full replacement of a link's mutable fields.
///
/// Both fields are required; `updated_at` is refreshed by the repository
/// when the update is applied.
#[derive(Debug, Clone)]
pub struct LinkUpdate {
    pub original_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "user_2abc".to_string(),
            "https://example.com".to_string(),
            "abc123".to_string(),
            now,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.owner_id, "user_2abc");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.created_at, now);
        assert_eq!(link.updated_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            owner_id: "user_2abc".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            short_code: "xyz789".to_string(),
        };

        assert_eq!(new_link.owner_id, "user_2abc");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
        assert_eq!(new_link.short_code, "xyz789");
    }

    #[test]
    fn test_link_update_fields() {
        let update = LinkUpdate {
            original_url: "https://example.com/moved".to_string(),
            short_code: "moved1".to_string(),
        };

        assert_eq!(update.original_url, "https://example.com/moved");
        assert_eq!(update.short_code, "moved1");
    }
}
