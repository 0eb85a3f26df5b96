//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// The 62-character alphabet short codes are generated from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Code length used when the caller does not supply one.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Minimum length for a caller-supplied short code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Maximum length for a caller-supplied short code.
pub const MAX_CODE_LENGTH: usize = 20;

/// Generates a random short code of `length` alphanumeric characters.
///
/// Characters are drawn uniformly from `[A-Za-z0-9]`. The generator makes
/// no uniqueness guarantee; a collision surfaces as a conflict when the
/// code is inserted.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: letters, digits, hyphens, underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the first violated rule's message.
pub fn validate_short_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();

    if length < MIN_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Short code must be at least 3 characters",
            json!({ "provided_length": length }),
        ));
    }

    if length > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Short code must be at most 20 characters",
            json!({ "provided_length": length }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Short code can only contain letters, numbers, hyphens, and underscores",
            json!({ "short_code": code }),
        ));
    }

    Ok(())
}
