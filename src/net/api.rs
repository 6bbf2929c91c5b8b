//! Account endpoints: login and registration.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds
//! (tests): stubs returning errors, since these endpoints only exist in the
//! browser's origin.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a user-presentable message: the
//! server's own `{"error": ...}` body when one is readable, a status line
//! otherwise. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{ApiErrorBody, LoginResponse};

pub const LOGIN_ENDPOINT: &str = "/account/login";
pub const REGISTER_ENDPOINT: &str = "/account/register";

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

/// Exchange credentials for a session token via `POST /account/login`.
///
/// # Errors
///
/// Returns the server-provided error message on a non-success status, or a
/// transport/status description when no message is readable.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| login_failed_message(status));
            return Err(message);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /account/register`. Success does not log the
/// new account in; the caller is expected to sign in afterwards.
///
/// # Errors
///
/// Returns the server-provided error message on a non-success status, or a
/// transport/status description when no message is readable.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| register_failed_message(status));
            return Err(message);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, email, password);
        Err("not available outside the browser".to_owned())
    }
}
