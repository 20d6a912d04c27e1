use std::sync::Arc;

use super::*;
use crate::util::session_store::MemoryStorage;

fn memory_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::default()))
}

// =============================================================
// Auth check
// =============================================================

#[test]
fn missing_token_redirects_to_login() {
    assert_eq!(require_auth(&memory_store()), AuthAccess::RedirectLogin);
}

#[test]
fn present_token_proceeds_with_it() {
    let store = memory_store();
    store.set_auth_token("tok-1");

    assert_eq!(
        require_auth(&store),
        AuthAccess::Proceed {
            token: "tok-1".to_owned()
        }
    );
}

#[test]
fn legacy_token_satisfies_the_auth_check() {
    let store = memory_store();
    store.set_legacy_token("tok-legacy");

    assert_eq!(
        require_auth(&store),
        AuthAccess::Proceed {
            token: "tok-legacy".to_owned()
        }
    );
}

#[test]
fn empty_token_counts_as_unauthenticated() {
    let store = memory_store();
    store.set_auth_token("");

    assert_eq!(require_auth(&store), AuthAccess::RedirectLogin);
}

// =============================================================
// League-context check
// =============================================================

#[test]
fn league_check_requires_auth_before_selection() {
    let store = memory_store();
    store.select_league("9");

    assert_eq!(require_league(&store), LeagueAccess::RedirectLogin);
}

#[test]
fn authenticated_without_selection_goes_to_dashboard() {
    let store = memory_store();
    store.set_auth_token("tok-1");

    assert_eq!(require_league(&store), LeagueAccess::RedirectDashboard);
}

#[test]
fn authenticated_with_selection_proceeds() {
    let store = memory_store();
    store.set_auth_token("tok-1");
    store.select_league("9");

    assert_eq!(
        require_league(&store),
        LeagueAccess::Proceed {
            token: "tok-1".to_owned(),
            league_id: "9".to_owned()
        }
    );
}
