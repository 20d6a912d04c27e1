//! Dashboard: the league picker between auth and the league screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! First protected page after login. Runs the auth check, pulls the user's
//! league memberships, and routes on the count: exactly one league goes
//! straight to its detail page with a history replace, several render as a
//! card grid with the last-opened league promoted to the front, none renders
//! the create/join prompts.
//!
//! ERROR HANDLING
//! ==============
//! A failed load stays on this page with an inline message; redirects only
//! ever come from the auth check. The async continuation checks an alive
//! flag before touching signals so a fetch that outlives the page is a
//! no-op.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::app::{LEAGUE_CREATE_PATH, LEAGUE_DETAIL_PATH, LEAGUE_JOIN_PATH, LOGIN_PATH};
use crate::components::league_card::LeagueCard;
use crate::net::types::LeagueSummary;
use crate::util::guard::{AuthAccess, redirect_options, require_auth};
use crate::util::session_store::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let leagues: RwSignal<Option<Vec<LeagueSummary>>> = RwSignal::new(None);
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);
    let last_league: RwSignal<Option<String>> = RwSignal::new(None);
    let requested = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let alive = Arc::new(AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    Effect::new({
        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        let alive = Arc::clone(&alive);
        move |_| {
            if requested.get() {
                return;
            }
            requested.set(true);
            let AuthAccess::Proceed { token } = require_auth(&session) else {
                navigate(LOGIN_PATH, redirect_options());
                return;
            };
            last_league.set(session.last_league_id());
            #[cfg(feature = "hydrate")]
            load_leagues(
                session.clone(),
                navigate.clone(),
                Arc::clone(&alive),
                token,
                leagues,
                load_error,
            );
            #[cfg(not(feature = "hydrate"))]
            let _ = token;
        }
    });

    let open_league = Callback::new({
        let session = session.clone();
        let navigate = navigate.clone();
        move |league_id: String| {
            session.select_league(&league_id);
            navigate(LEAGUE_DETAIL_PATH, Default::default());
        }
    });

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"Le tue leghe"</h1>
                <p class="dashboard__subtitle">"Gestisci le tue leghe o creane una nuova."</p>
            </header>
            {move || match leagues.get() {
                None => {
                    view! { <div class="dashboard__status">"Sto controllando le tue leghe..."</div> }
                        .into_any()
                }
                Some(list) => {
                    if let Some(message) = load_error.get() {
                        view! { <div class="dashboard__error">{message}</div> }.into_any()
                    } else if list.len() > 1 {
                        let last = last_league.get();
                        let cards = promote_last_opened(list, last.as_deref())
                            .into_iter()
                            .map(|league| {
                                let marked = last.as_deref() == Some(league.id.as_str());
                                view! {
                                    <LeagueCard league=league last_opened=marked on_open=open_league />
                                }
                            })
                            .collect::<Vec<_>>();
                        view! { <div class="dashboard__grid">{cards}</div> }.into_any()
                    } else if auto_select_target(&list).is_some() {
                        // Being auto-opened; the load already replaced the route.
                        ().into_any()
                    } else {
                        render_empty_state().into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn load_leagues(
    session: SessionStore,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    alive: Arc<AtomicBool>,
    token: String,
    leagues: RwSignal<Option<Vec<LeagueSummary>>>,
    load_error: RwSignal<Option<String>>,
) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_user_leagues(&token).await {
            Ok(body) => {
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let list = crate::net::normalize::normalize_league_summaries(&body);
                if let Some(only) = auto_select_target(&list) {
                    session.select_league(only);
                    navigate(LEAGUE_DETAIL_PATH, redirect_options());
                }
                leagues.set(Some(list));
            }
            Err(err) => {
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                log::error!("league lookup failed: {err}");
                load_error.set(Some("Non riesco a recuperare le leghe. Riprova.".to_owned()));
                leagues.set(Some(Vec::new()));
            }
        }
    });
}

/// The id to auto-open when the user belongs to exactly one league.
fn auto_select_target(leagues: &[LeagueSummary]) -> Option<&str> {
    match leagues {
        [only] => Some(only.id.as_str()),
        _ => None,
    }
}

/// Stable promotion of the last-opened league to the front of the grid.
fn promote_last_opened(mut leagues: Vec<LeagueSummary>, last: Option<&str>) -> Vec<LeagueSummary> {
    if leagues.len() > 1
        && let Some(last) = last
    {
        leagues.sort_by_key(|league| league.id != last);
    }
    leagues
}

fn render_empty_state() -> impl IntoView {
    view! {
        <div class="dashboard__grid">
            <div class="dashboard-card">
                <h2 class="dashboard-card__title">"Crea una lega"</h2>
                <p class="dashboard-card__text">"Inizia la tua competizione invitando amici."</p>
                <a class="dashboard-card__action" href=LEAGUE_CREATE_PATH>
                    "Crea lega"
                </a>
            </div>
            <div class="dashboard-card">
                <h2 class="dashboard-card__title">"Unisciti a una lega"</h2>
                <p class="dashboard-card__text">
                    "Inserisci il codice di invito che hai ricevuto."
                </p>
                <a
                    class="dashboard-card__action dashboard-card__action--ghost"
                    href=LEAGUE_JOIN_PATH
                >
                    "Unisciti"
                </a>
            </div>
        </div>
    }
}
