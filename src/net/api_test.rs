use super::*;

#[test]
fn endpoints_use_the_account_prefix() {
    assert_eq!(LOGIN_ENDPOINT, "/account/login");
    assert_eq!(REGISTER_ENDPOINT, "/account/register");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "registration failed: 409");
}
