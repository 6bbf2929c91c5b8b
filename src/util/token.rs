//! Display-only decoding of the persisted session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is an opaque bearer credential minted server-side. Decoding its
//! payload here is a rendering convenience (username, email, avatar); no
//! signature is verified and nothing security-relevant may depend on it.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::SessionUser;

/// Decode the JWT-style payload segment of `token` into a [`SessionUser`].
///
/// Returns `None` for anything that is not `header.payload[.signature]` with
/// a base64url-encoded JSON payload. A missing token and a malformed one are
/// indistinguishable to callers; both render the unauthenticated view.
pub fn decode_session_user(token: &str) -> Option<SessionUser> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}
