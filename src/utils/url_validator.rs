//! Destination URL validation.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` parses as an absolute URL.
///
/// The URL is stored verbatim; no normalization is applied. Relative
/// references fail to parse and are rejected.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative
/// URLs.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}
