//! Driver management for the selected league.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin screen of the league shell. Loads the league detail and the
//! driver roster concurrently; the league outcome gates the whole page while
//! the roster degrades to a fixed fallback list, so a flaky driver endpoint
//! never blanks the screen. Selections live in browser storage keyed by
//! league and only super users may change them.
//!
//! ERROR HANDLING
//! ==============
//! League failures render as the centered note (server message when it sent
//! one). Driver failures are absorbed by the fallback roster and logged.

#[cfg(test)]
#[path = "league_drivers_test.rs"]
mod league_drivers_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app::{DASHBOARD_PATH, LOGIN_PATH};
use crate::components::app_sidebar::{AppSidebar, SidebarItem};
use crate::components::sidebar::{Sidebar, SidebarInset, SidebarProvider, SidebarTrigger};
use crate::net::types::{Driver, LeagueDetail};
use crate::util::guard::{LeagueAccess, redirect_options, require_league};
use crate::util::session_store::SessionStore;

#[component]
pub fn LeagueDriversPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let league: RwSignal<Option<LeagueDetail>> = RwSignal::new(None);
    let drivers: RwSignal<Vec<Driver>> = RwSignal::new(Vec::new());
    let selected: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let checked = RwSignal::new(false);

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
            if checked.get() {
                return;
            }
            checked.set(true);
            match require_league(&session) {
                LeagueAccess::RedirectLogin => navigate(LOGIN_PATH, redirect_options()),
                LeagueAccess::RedirectDashboard => navigate(DASHBOARD_PATH, redirect_options()),
                LeagueAccess::Proceed { token, league_id } => {
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local({
                        let session = session.clone();
                        let alive = Arc::clone(&alive);
                        async move {
                            let (league_outcome, drivers_outcome) = futures::join!(
                                crate::net::api::fetch_league_detail(&token, &league_id),
                                crate::net::api::fetch_drivers(&token),
                            );
                            if !alive.load(Ordering::Relaxed) {
                                return;
                            }

                            match league_outcome {
                                Ok(response) => {
                                    if let Some(message) = crate::net::api::rejection_message(
                                        &response,
                                        "Non riesco a caricare i dettagli della lega.",
                                    ) {
                                        load_error.set(Some(message));
                                        loading.set(false);
                                        return;
                                    }
                                    let normalized =
                                        crate::net::normalize::normalize_league_detail(
                                            &response.body,
                                        );
                                    let Some(detail) = normalized else {
                                        load_error
                                            .set(Some("Dettagli lega non validi.".to_owned()));
                                        loading.set(false);
                                        return;
                                    };
                                    selected.set(session.driver_selection(&detail.id));
                                    league.set(Some(detail));
                                }
                                Err(err) => {
                                    log::error!("league detail load failed: {err}");
                                    load_error.set(Some(
                                        "Non riesco a caricare i dettagli della lega.".to_owned(),
                                    ));
                                    loading.set(false);
                                    return;
                                }
                            }

                            let roster = match drivers_outcome {
                                Ok(response) if response.ok => {
                                    crate::net::normalize::normalize_drivers(&response.body)
                                }
                                _ => Vec::new(),
                            };
                            drivers.set(resolve_roster(roster));
                            loading.set(false);
                        }
                    });
                    #[cfg(not(feature = "hydrate"))]
                    let _ = (token, league_id);
                }
            }
        }
    });

    let toggle = Callback::new({
        let session = session.clone();
        move |driver_id: String| {
            let Some(detail) = league.get() else {
                return;
            };
            let next = toggle_selection(&selected.get(), &driver_id, detail.is_super_user);
            let Some(next) = next else {
                return;
            };
            session.set_driver_selection(&detail.id, &next);
            selected.set(next);
        }
    });

    move || {
        if loading.get() {
            return view! {
                <div class="drivers-gate">
                    <div class="drivers-gate__note">"Sto caricando i piloti..."</div>
                </div>
            }
            .into_any();
        }
        let Some(detail) = league.get() else {
            let message = load_error
                .get()
                .unwrap_or_else(|| "Dettagli lega non disponibili.".to_owned());
            return view! {
                <div class="drivers-gate">
                    <div class="drivers-gate__note">{message}</div>
                </div>
            }
            .into_any();
        };
        render_manager(&detail, league, drivers, selected, toggle).into_any()
    }
}

fn render_manager(
    detail: &LeagueDetail,
    league: RwSignal<Option<LeagueDetail>>,
    drivers: RwSignal<Vec<Driver>>,
    selected: RwSignal<Vec<String>>,
    toggle: Callback<String>,
) -> impl IntoView {
    let is_super_user = detail.is_super_user;
    let helper = if is_super_user {
        "Seleziona i piloti da assegnare alla tua squadra."
    } else {
        "Solo il super utente puo modificare le selezioni dei piloti."
    };

    view! {
        <SidebarProvider>
            <Sidebar>
                <AppSidebar league=league active=SidebarItem::Admin />
            </Sidebar>
            <SidebarInset>
                <div class="league-page">
                    <header class="league-page__topbar">
                        <SidebarTrigger />
                        <p class="league-page__crumb">"Gestione piloti"</p>
                    </header>
                    <section class="driver-panel">
                        <div class="driver-panel__head">
                            <div>
                                <h1 class="driver-panel__title">"Piloti disponibili"</h1>
                                <p class="driver-panel__helper">{helper}</p>
                            </div>
                            <p class="driver-panel__count">
                                "Selezionati: "
                                {move || selected.with(Vec::len)}
                            </p>
                        </div>
                        <table class="driver-table">
                            <caption class="driver-table__caption">
                                "Elenco piloti Formula 1"
                            </caption>
                            <thead>
                                <tr>
                                    <th class="driver-table__number-head">"#"</th>
                                    <th>"Pilota"</th>
                                    <th>"Team"</th>
                                    <th class="driver-table__select-head">"Seleziona"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    drivers
                                        .get()
                                        .into_iter()
                                        .map(|driver| {
                                            render_driver_row(driver, selected, is_super_user, toggle)
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>
                </div>
            </SidebarInset>
        </SidebarProvider>
    }
}

fn render_driver_row(
    driver: Driver,
    selected: RwSignal<Vec<String>>,
    is_super_user: bool,
    toggle: Callback<String>,
) -> impl IntoView {
    let row_id = driver.id.clone();
    let check_id = driver.id.clone();
    let is_checked = move || selected.with(|ids| ids.iter().any(|id| id == &row_id));

    view! {
        <tr class="driver-table__row" class:driver-table__row--selected=is_checked.clone()>
            <td class="driver-table__number">{driver.number}</td>
            <td>{driver.name}</td>
            <td>{driver.team}</td>
            <td class="driver-table__select">
                <input
                    type="checkbox"
                    prop:checked=is_checked.clone()
                    disabled=!is_super_user
                    on:change=move |_| toggle.run(check_id.clone())
                />
            </td>
        </tr>
    }
}

/// Next selection after toggling `driver_id`, or `None` when the caller may
/// not modify selections.
fn toggle_selection(
    current: &[String],
    driver_id: &str,
    is_super_user: bool,
) -> Option<Vec<String>> {
    if !is_super_user {
        return None;
    }
    let mut next = current.to_vec();
    if let Some(position) = next.iter().position(|id| id == driver_id) {
        next.remove(position);
    } else {
        next.push(driver_id.to_owned());
    }
    Some(next)
}

#[cfg(any(feature = "hydrate", test))]
fn resolve_roster(normalized: Vec<Driver>) -> Vec<Driver> {
    if normalized.is_empty() {
        fallback_drivers()
    } else {
        normalized
    }
}

/// The roster shown when the backend has nothing usable.
#[cfg(any(feature = "hydrate", test))]
fn fallback_drivers() -> Vec<Driver> {
    [
        ("44", "Lewis Hamilton", "Ferrari", "44"),
        ("16", "Charles Leclerc", "Ferrari", "16"),
        ("1", "Max Verstappen", "Red Bull", "1"),
        ("11", "Sergio Perez", "Red Bull", "11"),
        ("4", "Lando Norris", "McLaren", "4"),
        ("81", "Oscar Piastri", "McLaren", "81"),
        ("63", "George Russell", "Mercedes", "63"),
        ("12", "Kimi Antonelli", "Mercedes", "12"),
    ]
    .into_iter()
    .map(|(id, name, team, number)| Driver {
        id: id.to_owned(),
        name: name.to_owned(),
        team: team.to_owned(),
        number: number.to_owned(),
    })
    .collect()
}
