//! Link lifecycle and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_short_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// User-facing message when a short code collides with an existing link.
const CODE_TAKEN_MESSAGE: &str = "This short code is already taken. Please choose another one.";

/// Merged outcome for a missing row and an ownership mismatch. The two
/// cases are deliberately indistinguishable so callers cannot probe for
/// other users' links.
const NOT_FOUND_MESSAGE: &str = "Link not found or unauthorized";

/// Service for creating, mutating, and resolving short links.
///
/// Every owner-scoped operation takes the caller's identity as an explicit
/// argument; the HTTP layer rejects unauthenticated requests before any of
/// these methods can run. Validation happens here, ahead of any repository
/// call, and storage constraint violations are translated into domain
/// outcomes.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link owned by `owner_id`.
    ///
    /// When `short_code` is absent, a random 6-character code is generated.
    /// A generated code carries no uniqueness guarantee; a collision
    /// surfaces as the same code-taken conflict a custom code would.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or a
    /// supplied code violates the length/character rules; the repository is
    /// never called in that case. Returns [`AppError::Conflict`] if the
    /// code is already taken.
    pub async fn create_link(
        &self,
        owner_id: &str,
        original_url: String,
        short_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Please enter a valid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(code) = &short_code {
            validate_short_code(code)?;
        }

        let short_code = short_code.unwrap_or_else(|| generate_code(DEFAULT_CODE_LENGTH));

        let new_link = NewLink {
            owner_id: owner_id.to_string(),
            original_url,
            short_code,
        };

        self.repository
            .insert(new_link)
            .await
            .map_err(Self::translate_code_conflict)
    }

    /// Replaces both mutable fields of a link owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on malformed input (repository
    /// untouched), [`AppError::NotFound`] when no link matches the id and
    /// owner, and [`AppError::Conflict`] when the new code is taken.
    pub async fn update_link(
        &self,
        owner_id: &str,
        link_id: i64,
        original_url: String,
        short_code: String,
    ) -> Result<Link, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Please enter a valid URL", json!({ "reason": e.to_string() }))
        })?;

        validate_short_code(&short_code)?;

        let update = LinkUpdate {
            original_url,
            short_code,
        };

        self.repository
            .update(link_id, owner_id, update)
            .await
            .map_err(Self::translate_code_conflict)?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE, json!({ "link_id": link_id })))
    }

    /// Deletes a link owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no link matches the id and
    /// owner.
    pub async fn delete_link(&self, owner_id: &str, link_id: i64) -> Result<(), AppError> {
        self.repository
            .delete(link_id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE, json!({ "link_id": link_id })))?;

        Ok(())
    }

    /// Resolves a short code to its destination URL. Public path, no
    /// identity involved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .map(|link| link.original_url)
            .ok_or_else(|| {
                AppError::not_found("Link not found", json!({ "short_code": short_code }))
            })
    }

    /// Returns all of an owner's links, most recently created first.
    pub async fn list_links(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Rewraps a repository uniqueness conflict with the user-facing
    /// code-taken message; everything else passes through unchanged.
    fn translate_code_conflict(err: AppError) -> AppError {
        match err {
            AppError::Conflict { .. } => AppError::conflict(CODE_TAKEN_MESSAGE, json!({})),
            other => other,
        }
    }
}
