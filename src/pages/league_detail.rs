//! League overview inside the sidebar shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! First league screen after selection. Needs both a token and a selected
//! league id; with those it loads the league detail and renders name,
//! description, dates, and the super-user badge. Load failures are fatal to
//! the page content but never redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app::{DASHBOARD_PATH, LEAGUE_DRIVERS_PATH, LOGIN_PATH};
use crate::components::app_sidebar::{AppSidebar, SidebarItem};
use crate::components::sidebar::{Sidebar, SidebarInset, SidebarProvider, SidebarTrigger};
use crate::net::types::LeagueDetail;
use crate::util::dates::format_unix_date;
use crate::util::guard::{LeagueAccess, redirect_options, require_league};
use crate::util::session_store::SessionStore;

#[component]
pub fn LeagueDetailPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let league: RwSignal<Option<LeagueDetail>> = RwSignal::new(None);
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);
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
                    load_detail(Arc::clone(&alive), token, league_id, league, load_error);
                    #[cfg(not(feature = "hydrate"))]
                    let _ = (token, league_id);
                }
            }
        }
    });

    view! {
        <SidebarProvider>
            <Sidebar>
                <AppSidebar league=league active=SidebarItem::Overview />
            </Sidebar>
            <SidebarInset>
                <header class="league-page__topbar">
                    <SidebarTrigger />
                    <h1 class="league-page__title">"Panoramica"</h1>
                </header>
                <section class="league-page__content">
                    {move || match (league.get(), load_error.get()) {
                        (_, Some(message)) => {
                            view! { <div class="league-page__error">{message}</div> }.into_any()
                        }
                        (Some(detail), None) => render_detail(&detail).into_any(),
                        (None, None) => {
                            view! {
                                <div class="league-page__status">
                                    "Sto caricando i dettagli della lega..."
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </SidebarInset>
        </SidebarProvider>
    }
}

#[cfg(feature = "hydrate")]
fn load_detail(
    alive: Arc<AtomicBool>,
    token: String,
    league_id: String,
    league: RwSignal<Option<LeagueDetail>>,
    load_error: RwSignal<Option<String>>,
) {
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_league_detail(&token, &league_id).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        match outcome {
            Ok(response) => {
                if let Some(message) = crate::net::api::rejection_message(
                    &response,
                    "Non riesco a caricare i dettagli della lega.",
                ) {
                    load_error.set(Some(message));
                    return;
                }
                match crate::net::normalize::normalize_league_detail(&response.body) {
                    Some(detail) => league.set(Some(detail)),
                    None => load_error.set(Some("Dettagli lega non validi.".to_owned())),
                }
            }
            Err(err) => {
                log::error!("league detail load failed: {err}");
                load_error.set(Some(
                    "Non riesco a caricare i dettagli della lega.".to_owned(),
                ));
            }
        }
    });
}

fn render_detail(detail: &LeagueDetail) -> impl IntoView {
    let name = detail.name.clone();
    let description = detail.description.clone();
    let has_description = !description.is_empty();
    let is_super_user = detail.is_super_user;
    let created = detail.created_at.map(format_unix_date);
    let updated = detail.updated_at.map(format_unix_date);

    view! {
        <article class="league-overview">
            <div class="league-overview__head">
                <h2 class="league-overview__name">{name}</h2>
                {is_super_user
                    .then(|| {
                        view! { <span class="league-overview__badge">"Super utente"</span> }
                    })}
            </div>
            {has_description
                .then(|| view! { <p class="league-overview__description">{description}</p> })}
            <dl class="league-overview__meta">
                {created
                    .map(|date| {
                        view! {
                            <div class="league-overview__meta-row">
                                <dt>"Creata il"</dt>
                                <dd>{date}</dd>
                            </div>
                        }
                    })}
                {updated
                    .map(|date| {
                        view! {
                            <div class="league-overview__meta-row">
                                <dt>"Aggiornata il"</dt>
                                <dd>{date}</dd>
                            </div>
                        }
                    })}
            </dl>
            <a class="league-overview__drivers-link" href=LEAGUE_DRIVERS_PATH>
                "Gestisci i piloti"
            </a>
        </article>
    }
}
