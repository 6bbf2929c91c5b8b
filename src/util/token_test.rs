use super::*;

fn encode_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.not-a-real-signature")
}

#[test]
fn decodes_username_and_email_from_payload() {
    let token = encode_token(&serde_json::json!({
        "username": "ada",
        "email": "ada@example.com",
    }));

    let user = decode_session_user(&token).expect("payload decodes");
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn signature_segment_is_never_inspected() {
    let payload = serde_json::json!({ "username": "ada", "email": "ada@example.com" });
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());

    // No signature at all still decodes.
    assert!(decode_session_user(&format!("{header}.{body}")).is_some());
    // Garbage signature decodes identically.
    assert!(decode_session_user(&format!("{header}.{body}.!!!!")).is_some());
}

#[test]
fn rejects_tokens_without_a_payload_segment() {
    assert_eq!(decode_session_user(""), None);
    assert_eq!(decode_session_user("only-one-segment"), None);
}

#[test]
fn rejects_non_base64_payloads() {
    assert_eq!(decode_session_user("header.%%%%.sig"), None);
}

#[test]
fn rejects_payloads_that_are_not_session_json() {
    let body = URL_SAFE_NO_PAD.encode(b"not json");
    assert_eq!(decode_session_user(&format!("h.{body}.s")), None);

    let wrong_shape = URL_SAFE_NO_PAD.encode(br#"{"sub":"123"}"#);
    assert_eq!(decode_session_user(&format!("h.{wrong_shape}.s")), None);
}

#[test]
fn extra_payload_fields_are_ignored() {
    let token = encode_token(&serde_json::json!({
        "username": "ada",
        "email": "ada@example.com",
        "iat": 1_700_000_000,
        "exp": 1_700_003_600,
    }));
    assert!(decode_session_user(&token).is_some());
}
