//! Bearer credential verification for management requests.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies bearer credentials carrying an owner identity.
///
/// A credential is `<owner_id>.<signature>` where the signature is the
/// hex-encoded HMAC-SHA256 of the owner id, keyed by `signing_secret`.
/// Verification recovers the owner id without any storage round-trip; a
/// credential minted with a different secret never verifies.
pub struct AuthService {
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when credentials were
    /// issued.
    pub fn new(signing_secret: String) -> Self {
        Self { signing_secret }
    }

    /// Computes the hex-encoded HMAC-SHA256 signature of an owner id.
    fn sign(&self, owner_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(owner_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Issues a bearer credential for an owner id.
    pub fn issue_token(&self, owner_id: &str) -> String {
        format!("{}.{}", owner_id, self.sign(owner_id))
    }

    /// Verifies a bearer credential and returns the owner id it carries.
    ///
    /// The signature never contains a dot, so splitting at the last dot
    /// recovers the owner id even when the id itself contains dots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credential is malformed,
    /// carries an empty owner id, or fails signature verification.
    pub fn verify_token(&self, token: &str) -> Result<String, AppError> {
        let Some((owner_id, signature)) = token.rsplit_once('.') else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Malformed credential" }),
            ));
        };

        if owner_id.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Malformed credential" }),
            ));
        }

        let signature = hex::decode(signature).map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Malformed credential" }),
            )
        })?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(owner_id.as_bytes());
        mac.verify_slice(&signature).map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credential signature" }),
            )
        })?;

        Ok(owner_id.to_string())
    }
}
