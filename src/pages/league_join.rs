//! Join-league form, the invite-code counterpart of the create form.

#[cfg(test)]
#[path = "league_join_test.rs"]
mod league_join_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::DASHBOARD_PATH;
use crate::app::LOGIN_PATH;
use crate::util::form::ErrorSlot;
use crate::util::guard::{AuthAccess, redirect_options, require_auth};
use crate::util::session_store::SessionStore;

#[component]
pub fn LeagueJoinPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let code_slot = ErrorSlot::new();
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

            let code_value = code.get();
            if let Some(message) = code_error(&code_value) {
                code_slot.show(message);
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
                    let sent = crate::net::api::join_league(&token, code_value.trim()).await;
                    match sent {
                        Ok(response) => {
                            let rejected = crate::net::api::rejection_message(
                                &response,
                                "Iscrizione non riuscita. Riprova.",
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
                            log::error!("league join failed: {err}");
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
                    <h1 class="auth-card__heading">"Unisciti a una lega"</h1>
                    <p class="auth-card__subtitle">
                        "Inserisci il codice di invito che hai ricevuto."
                    </p>
                </div>
                <Show when=move || request_slot.get().is_some()>
                    <div class="auth-card__alert">
                        <p>{move || request_slot.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Codice di invito"</span>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Inserisci il codice"
                            prop:value=move || code.get()
                            on:input=move |ev| {
                                code.set(event_target_value(&ev));
                                code_slot.clear();
                                request_slot.clear();
                            }
                        />
                        <Show when=move || code_slot.get().is_some()>
                            <p class="auth-form__error">
                                {move || code_slot.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Iscrizione in corso..." } else { "Unisciti" }}
                    </button>
                </form>
            </main>
        </div>
    }
}

fn code_error(code: &str) -> Option<&'static str> {
    code.trim()
        .is_empty()
        .then_some("Inserisci il codice di invito")
}
