//! Mount-time access checks for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route beyond login/registration needs an auth token, and the league
//! detail/driver screens additionally need a selected league. Pages run one
//! of these checks in a mount effect and either redirect or start their data
//! loads with the resolved context.
//!
//! DESIGN
//! ======
//! The checks are pure decisions over [`SessionStore`] state; navigation is
//! left to the caller so the decision logic stays testable without a router.
//! A redirect decision is terminal for that mount: callers must not fetch or
//! touch page state after one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use super::session_store::SessionStore;

/// Navigation options for redirects: replace the history entry so the back
/// button does not land on the page that bounced.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Outcome of the auth check for token-guarded pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAccess {
    /// Signed in; fetches may use the carried token.
    Proceed { token: String },
    /// No usable token; go to the login route and do nothing else.
    RedirectLogin,
}

/// Outcome of the combined auth + league-context check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeagueAccess {
    Proceed { token: String, league_id: String },
    RedirectLogin,
    /// Signed in but no league selected; the dashboard owns selection.
    RedirectDashboard,
}

pub fn require_auth(session: &SessionStore) -> AuthAccess {
    match session.auth_token() {
        Some(token) => AuthAccess::Proceed { token },
        None => AuthAccess::RedirectLogin,
    }
}

/// Auth first, league second: an expired session on a league page goes to
/// login, not to the dashboard.
pub fn require_league(session: &SessionStore) -> LeagueAccess {
    let Some(token) = session.auth_token() else {
        return LeagueAccess::RedirectLogin;
    };
    match session.selected_league_id() {
        Some(league_id) => LeagueAccess::Proceed { token, league_id },
        None => LeagueAccess::RedirectDashboard,
    }
}
