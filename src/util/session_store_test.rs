use std::sync::Arc;

use super::*;

fn memory_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::default()))
}

// =============================================================
// Token resolution
// =============================================================

#[test]
fn auth_token_absent_on_fresh_store() {
    assert_eq!(memory_store().auth_token(), None);
}

#[test]
fn auth_token_prefers_primary_key() {
    let store = memory_store();
    store.set_legacy_token("vecchio");
    store.set_auth_token("nuovo");

    assert_eq!(store.auth_token(), Some("nuovo".to_owned()));
}

#[test]
fn auth_token_falls_back_to_legacy_key() {
    let store = memory_store();
    store.set_legacy_token("vecchio");

    assert_eq!(store.auth_token(), Some("vecchio".to_owned()));
}

#[test]
fn empty_token_values_count_as_absent() {
    let store = memory_store();
    store.set_auth_token("");
    store.set_legacy_token("vecchio");

    assert_eq!(store.auth_token(), Some("vecchio".to_owned()));

    store.set_legacy_token("");
    assert_eq!(store.auth_token(), None);
}

#[test]
fn clear_tokens_removes_both_keys() {
    let store = memory_store();
    store.set_auth_token("a");
    store.set_legacy_token("b");

    store.clear_tokens();

    assert_eq!(store.auth_token(), None);
}

// =============================================================
// League selection
// =============================================================

#[test]
fn select_league_writes_both_selection_keys() {
    let store = memory_store();

    store.select_league("7");

    assert_eq!(store.last_league_id(), Some("7".to_owned()));
    assert_eq!(store.selected_league_id(), Some("7".to_owned()));
}

#[test]
fn selection_keys_read_independently() {
    let backend = Arc::new(MemoryStorage::default());
    backend.set(LAST_LEAGUE_KEY, "3");
    let store = SessionStore::new(backend);

    assert_eq!(store.last_league_id(), Some("3".to_owned()));
    assert_eq!(store.selected_league_id(), None);
}

#[test]
fn clear_tokens_keeps_league_selection() {
    let store = memory_store();
    store.set_auth_token("a");
    store.select_league("5");

    store.clear_tokens();

    assert_eq!(store.last_league_id(), Some("5".to_owned()));
}

// =============================================================
// Driver selection
// =============================================================

#[test]
fn driver_selection_round_trips() {
    let store = memory_store();
    let ids = vec!["44".to_owned(), "16".to_owned()];

    store.set_driver_selection("lg-1", &ids);

    assert_eq!(store.driver_selection("lg-1"), ids);
}

#[test]
fn driver_selection_is_scoped_per_league() {
    let store = memory_store();
    store.set_driver_selection("lg-1", &["44".to_owned()]);

    assert_eq!(store.driver_selection("lg-1"), vec!["44".to_owned()]);
    assert!(store.driver_selection("lg-2").is_empty());
}

#[test]
fn driver_selection_tolerates_bad_stored_values() {
    let backend = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);

    for raw in ["non-json", "{\"a\": 1}", "\"44\"", ""] {
        backend.set("selectedDrivers:lg-1", raw);
        assert!(store.driver_selection("lg-1").is_empty(), "raw: {raw}");
    }
}

#[test]
fn driver_selection_drops_non_string_elements() {
    let backend = Arc::new(MemoryStorage::default());
    backend.set("selectedDrivers:lg-1", "[\"44\", 16, null, \"63\"]");
    let store = SessionStore::new(backend);

    assert_eq!(
        store.driver_selection("lg-1"),
        vec!["44".to_owned(), "63".to_owned()]
    );
}
