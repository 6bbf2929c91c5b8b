//! Gravatar-style avatar URLs derived from the session email.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use sha2::{Digest, Sha256};

/// Build the avatar image URL for `email`.
///
/// The address is the lowercase hex SHA-256 of the trimmed, lowercased email,
/// requested at 80px with an identicon fallback for unregistered addresses.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let digest = hasher.finalize();
    let hash: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("https://www.gravatar.com/avatar/{hash}?s=80&d=identicon")
}
