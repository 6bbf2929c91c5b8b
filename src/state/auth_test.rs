use super::*;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

#[test]
fn default_state_is_unauthenticated_on_login_tab() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.tab, AuthTab::Login);
}

#[test]
fn from_token_decodes_a_valid_token() {
    let payload = URL_SAFE_NO_PAD.encode(br#"{"username":"ada","email":"ada@example.com"}"#);
    let token = format!("h.{payload}.s");

    let state = AuthState::from_token(Some(&token));
    let user = state.user.expect("user decoded");
    assert_eq!(user.username, "ada");
}

#[test]
fn absent_and_malformed_tokens_are_indistinguishable() {
    let absent = AuthState::from_token(None);
    let malformed = AuthState::from_token(Some("garbage"));
    assert!(absent.user.is_none());
    assert!(malformed.user.is_none());
}

#[test]
fn auth_tab_default_is_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
    assert_ne!(AuthTab::Login, AuthTab::Register);
}
