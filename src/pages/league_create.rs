//! Create-league form.
//!
//! DESIGN
//! ======
//! Auth is checked twice: once on mount and again right before the request,
//! since the token can expire while the form sits open. Field errors here
//! are sticky; typing in a field clears its error together with any
//! request-level one.

#[cfg(test)]
#[path = "league_create_test.rs"]
mod league_create_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::DASHBOARD_PATH;
use crate::app::LOGIN_PATH;
use crate::util::form::ErrorSlot;
use crate::util::guard::{AuthAccess, redirect_options, require_auth};
use crate::util::session_store::SessionStore;

#[component]
pub fn LeagueCreatePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let name_slot = ErrorSlot::new();
    let description_slot = ErrorSlot::new();
    let request_slot = ErrorSlot::new();

    let checked = RwSignal::new(false);
    Effect::new({
        let session = session.clone();
        let navigate = navigate.clone();
        move |_| {
            if checked.get() {
                return;
            }
            checked.set(true);
            if matches!(require_auth(&session), AuthAccess::RedirectLogin) {
                navigate(LOGIN_PATH, redirect_options());
            }
        }
    });

    let on_submit = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            request_slot.clear();

            let name_value = name.get();
            let description_value = description.get();
            let checks = [
                (name_slot, name_error(&name_value)),
                (description_slot, description_error(&description_value)),
            ];
            let mut failed = false;
            for (slot, fault) in checks {
                if let Some(message) = fault {
                    slot.show(message);
                    failed = true;
                }
            }
            if failed {
                return;
            }

            let AuthAccess::Proceed { token } = require_auth(&session) else {
                navigate(LOGIN_PATH, redirect_options());
                return;
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local({
                let navigate = navigate.clone();
                async move {
                    let sent = crate::net::api::create_league(
                        &token,
                        name_value.trim(),
                        description_value.trim(),
                    )
                    .await;
                    match sent {
                        Ok(response) => {
                            let rejected = crate::net::api::rejection_message(
                                &response,
                                "Creazione non riuscita. Riprova.",
                            );
                            match rejected {
                                Some(message) => {
                                    request_slot.show(message);
                                    busy.set(false);
                                }
                                None => navigate(DASHBOARD_PATH, Default::default()),
                            }
                        }
                        Err(err) => {
                            log::error!("league creation failed: {err}");
                            request_slot.show("Errore di rete. Riprova.");
                            busy.set(false);
                        }
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = token;
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <main class="auth-card">
                <div class="auth-card__intro">
                    <h1 class="auth-card__heading">"Crea una lega"</h1>
                    <p class="auth-card__subtitle">
                        "Dai un nome e una descrizione alla tua nuova competizione."
                    </p>
                </div>
                <Show when=move || request_slot.get().is_some()>
                    <div class="auth-card__alert">
                        <p>{move || request_slot.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Nome lega"</span>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Inserisci un nome"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                name.set(event_target_value(&ev));
                                name_slot.clear();
                                request_slot.clear();
                            }
                        />
                        <Show when=move || name_slot.get().is_some()>
                            <p class="auth-form__error">
                                {move || name_slot.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Descrizione"</span>
                        <textarea
                            class="auth-form__input"
                            rows=4
                            placeholder="Scrivi una breve descrizione"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                description.set(event_target_value(&ev));
                                description_slot.clear();
                                request_slot.clear();
                            }
                        ></textarea>
                        <Show when=move || description_slot.get().is_some()>
                            <p class="auth-form__error">
                                {move || description_slot.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creazione in corso..." } else { "Crea lega" }}
                    </button>
                </form>
            </main>
        </div>
    }
}

fn name_error(name: &str) -> Option<&'static str> {
    name.trim()
        .is_empty()
        .then_some("Inserisci il nome della lega")
}

fn description_error(description: &str) -> Option<&'static str> {
    description
        .trim()
        .is_empty()
        .then_some("Inserisci una descrizione")
}
