//! GitHub data sources: repository metadata, language bytes, and the public
//! language color definitions.
//!
//! DESIGN
//! ======
//! Each widget's two repository fetches are chained here into one
//! `RepoOverview` result so a widget either has everything it renders or a
//! single error message. Widget pipelines are independent of one another;
//! only the color table is shared, and it is fetched exactly once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use std::collections::HashMap;

use super::types::{ColorEntry, LanguageBytes, RepoMetadata};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Public per-language color definitions, fetched once at page load.
pub const LANGUAGE_COLORS_URL: &str =
    "https://raw.githubusercontent.com/ozh/github-colors/refs/heads/master/colors.json";

/// Everything one repository widget renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RepoOverview {
    pub metadata: RepoMetadata,
    pub languages: LanguageBytes,
}

#[cfg(any(test, feature = "csr"))]
fn repo_endpoint(username: &str, repo: &str) -> String {
    format!("{GITHUB_API_BASE}/repos/{username}/{repo}")
}

#[cfg(any(test, feature = "csr"))]
fn languages_endpoint(username: &str, repo: &str) -> String {
    format!("{GITHUB_API_BASE}/repos/{username}/{repo}/languages")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch metadata and language bytes for one `(username, repo)` pair.
///
/// # Errors
///
/// Returns a message describing the first transport failure or non-success
/// status; the caller renders it in place of the repository description.
pub async fn fetch_repo_overview(username: &str, repo: &str) -> Result<RepoOverview, String> {
    #[cfg(feature = "csr")]
    {
        let metadata: RepoMetadata = get_json(&repo_endpoint(username, repo)).await?;
        let languages: LanguageBytes = get_json(&languages_endpoint(username, repo)).await?;
        Ok(RepoOverview {
            metadata,
            languages,
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, repo);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the language color definitions.
///
/// # Errors
///
/// Returns a message describing the transport failure or non-success status.
pub async fn fetch_language_colors() -> Result<HashMap<String, ColorEntry>, String> {
    #[cfg(feature = "csr")]
    {
        get_json(LANGUAGE_COLORS_URL).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
