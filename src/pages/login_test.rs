use super::*;

#[test]
fn accepted_token_requires_ok_status() {
    let rejected = ApiText {
        ok: false,
        body: "tok-1".to_owned(),
    };

    assert_eq!(accepted_token(&rejected), None);
}

#[test]
fn accepted_token_reads_plain_and_json_bodies() {
    let plain = ApiText {
        ok: true,
        body: "tok-1".to_owned(),
    };
    let wrapped = ApiText {
        ok: true,
        body: "\"tok-2\"".to_owned(),
    };

    assert_eq!(accepted_token(&plain), Some("tok-1".to_owned()));
    assert_eq!(accepted_token(&wrapped), Some("tok-2".to_owned()));
}

#[test]
fn accepted_token_absent_for_blank_body() {
    let blank = ApiText {
        ok: true,
        body: "   ".to_owned(),
    };

    assert_eq!(accepted_token(&blank), None);
}
