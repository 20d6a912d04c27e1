use super::*;

// =============================================================
// Endpoint assembly
// =============================================================

#[test]
fn endpoint_appends_path_to_backend_url() {
    let url = endpoint("/F1/Users/loginUser");

    assert!(url.starts_with(BACKEND_URL));
    assert!(url.ends_with("/F1/Users/loginUser"));
}

// =============================================================
// Payload builders
// =============================================================

#[test]
fn token_payload_carries_token_only() {
    assert_eq!(token_payload("t-1"), json!({"token": "t-1"}));
}

#[test]
fn detail_payload_encodes_league_id_as_json_text() {
    let payload = detail_payload("t-1", "lg-9");

    assert_eq!(payload["token"], "t-1");
    let inner: Value = serde_json::from_str(payload["jsonData"].as_str().unwrap()).unwrap();
    assert_eq!(inner, json!({"league_id": "lg-9"}));
}

#[test]
fn login_payload_wraps_credentials_in_json_text() {
    let payload = login_payload("pilota@example.com", "segreta1");

    let inner: Value = serde_json::from_str(payload["jsonData"].as_str().unwrap()).unwrap();
    assert_eq!(
        inner,
        json!({"email": "pilota@example.com", "password": "segreta1"})
    );
}

#[test]
fn register_payload_uses_camel_case_full_name() {
    let payload = register_payload("Mario Rossi", "mario@example.com", "segreta1");

    let inner: Value = serde_json::from_str(payload["jsonData"].as_str().unwrap()).unwrap();
    assert_eq!(
        inner,
        json!({
            "fullName": "Mario Rossi",
            "email": "mario@example.com",
            "password": "segreta1",
        })
    );
}

// =============================================================
// Token extraction
// =============================================================

#[test]
fn token_from_plain_text_body() {
    assert_eq!(token_from_body("tok-abc"), Some("tok-abc".to_owned()));
    assert_eq!(token_from_body("  tok-abc \n"), Some("tok-abc".to_owned()));
}

#[test]
fn token_from_json_string_body() {
    assert_eq!(token_from_body("\"tok-json\""), Some("tok-json".to_owned()));
    assert_eq!(token_from_body("\"\""), None);
}

#[test]
fn token_from_envelope_fields() {
    assert_eq!(
        token_from_body(r#"{"token": "t1"}"#),
        Some("t1".to_owned())
    );
    assert_eq!(
        token_from_body(r#"{"auth_token": "t2"}"#),
        Some("t2".to_owned())
    );
    assert_eq!(
        token_from_body(r#"{"data": {"token": "t3"}}"#),
        Some("t3".to_owned())
    );
}

#[test]
fn token_absent_for_empty_or_tokenless_bodies() {
    assert_eq!(token_from_body(""), None);
    assert_eq!(token_from_body("   "), None);
    assert_eq!(token_from_body(r#"{"status": "ok"}"#), None);
    assert_eq!(token_from_body(r#"{"token": ""}"#), None);
    assert_eq!(token_from_body("123"), None);
}

// =============================================================
// Rejection messages
// =============================================================

#[test]
fn success_has_no_rejection_message() {
    let response = ApiResponse {
        ok: true,
        body: json!({"status": "ok", "data": []}),
    };

    assert_eq!(rejection_message(&response, "fallito"), None);
}

#[test]
fn http_failure_uses_body_message() {
    let response = ApiResponse {
        ok: false,
        body: json!({"message": "Token scaduto"}),
    };

    assert_eq!(
        rejection_message(&response, "fallito"),
        Some("Token scaduto".to_owned())
    );
}

#[test]
fn error_status_on_ok_response_still_rejects() {
    let response = ApiResponse {
        ok: true,
        body: json!({"status": "error", "message": "Nome duplicato"}),
    };

    assert_eq!(
        rejection_message(&response, "fallito"),
        Some("Nome duplicato".to_owned())
    );
}

#[test]
fn missing_or_empty_message_falls_back() {
    let bare = ApiResponse {
        ok: false,
        body: json!({}),
    };
    let empty = ApiResponse {
        ok: false,
        body: json!({"message": ""}),
    };

    assert_eq!(rejection_message(&bare, "fallito"), Some("fallito".to_owned()));
    assert_eq!(rejection_message(&empty, "fallito"), Some("fallito".to_owned()));
}
