//! Session Token
//!
//! Cookie value format: `<session_id>.<base64url(HMAC-SHA256(session_id))>`.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};

/// Generate signed session token
pub fn sign(secret: &[u8], session_id: Uuid) -> AdminResult<String> {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes())
        .map_err(|e| AdminError::Internal(format!("Session signing failed: {e}")))?;

    Ok(format!("{}.{}", session_id, to_base64url(&signature)))
}

/// Parse and verify session token
///
/// Returns `None` for anything that was not produced by [`sign`] with the same
/// secret.
pub fn verify(secret: &[u8], token: &str) -> Option<Uuid> {
    let (session_id, signature_b64) = token.split_once('.')?;
    let signature = from_base64url(signature_b64).ok()?;

    if !verify_hmac_sha256(secret, session_id.as_bytes(), &signature) {
        return None;
    }

    session_id.parse().ok()
}
