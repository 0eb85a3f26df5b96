//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// All operations are single-row equality lookups or writes. Ownership
/// scoping for `update`/`delete` is part of the statement itself (the row
/// must match both `id` and `owner_id`), so a caller can never observe or
/// touch another owner's row through these operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns all links for an owner, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError>;

    /// Finds a link by its globally unique short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Replaces a link's mutable fields and refreshes `updated_at`.
    ///
    /// The write only applies when the row matches both `id` and
    /// `owner_id`; otherwise `Ok(None)` is returned and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new short code collides with
    /// another row. Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        owner_id: &str,
        update: LinkUpdate,
    ) -> Result<Option<Link>, AppError>;

    /// Removes a link, returning the deleted row.
    ///
    /// The delete only applies when the row matches both `id` and
    /// `owner_id`; otherwise `Ok(None)` is returned and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, owner_id: &str) -> Result<Option<Link>, AppError>;
}
