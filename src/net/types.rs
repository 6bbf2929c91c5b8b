//! Wire DTOs for the account backend and the GitHub endpoints.
//!
//! DESIGN
//! ======
//! These types keep only the fields the UI consumes; unknown fields in the
//! upstream payloads are ignored by serde. `LanguageBytes` carries a custom
//! deserializer because its JSON object's document order is the render
//! order and must survive the trip into Rust.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Repository metadata subset from `GET /repos/{owner}/{repo}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RepoMetadata {
    /// Short repository name.
    pub name: String,
    /// Repository description; GitHub reports `null` when unset.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical browser URL, used as the widget title link.
    pub html_url: String,
    /// Star count shown next to the title.
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Per-language byte counts from `GET /repos/{owner}/{repo}/languages`,
/// in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageBytes(pub Vec<(String, u64)>);

impl LanguageBytes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for LanguageBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor;

        impl<'de> Visitor<'de> for OrderedMapVisitor {
            type Value = LanguageBytes;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of language names to byte counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((language, bytes)) = access.next_entry::<String, u64>()? {
                    entries.push((language, bytes));
                }
                Ok(LanguageBytes(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor)
    }
}

/// One language entry in the public color-definitions JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ColorEntry {
    /// Display color; some languages are published without one.
    #[serde(default)]
    pub color: Option<String>,
}

/// Display identity decoded from the session-token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
}

/// Success body of `POST /account/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token to persist.
    pub token: String,
}

/// Error body the account endpoints return alongside non-success statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
