use super::*;

#[test]
fn invite_code_is_required() {
    assert_eq!(code_error(""), Some("Inserisci il codice di invito"));
    assert_eq!(code_error("  "), Some("Inserisci il codice di invito"));
    assert_eq!(code_error("ABC123"), None);
}
