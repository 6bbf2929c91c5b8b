//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The account menu derives everything it shows from the persisted token;
//! this state is the decoded, display-only view of that token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;
use crate::util::token::decode_session_user;

/// localStorage key holding the opaque session token. The only persisted key.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Tabs of the unauthenticated account panel. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Authentication state tracking the displayed user and the active tab.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub tab: AuthTab,
}

impl AuthState {
    /// Derive state from a stored token. An absent token and an undecodable
    /// one both yield the unauthenticated view.
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            user: token.and_then(decode_session_user),
            tab: AuthTab::default(),
        }
    }
}
