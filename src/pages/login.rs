//! Login page: local validation, then token exchange and redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public entry route. Validation failures never leave the page; a
//! successful exchange stores the token and moves to the dashboard, which
//! re-checks it on mount.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::DASHBOARD_PATH;
use crate::app::REGISTER_PATH;
use crate::components::password_input::PasswordInput;
#[cfg(any(feature = "hydrate", test))]
use crate::net::api::{ApiText, token_from_body};
use crate::util::form::{ErrorSlot, email_error, password_error};
use crate::util::session_store::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let email_slot = ErrorSlot::new();
    let password_slot = ErrorSlot::new();
    let request_slot = ErrorSlot::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        let email_fault = email_error(&email_value);
        let password_fault = password_error(&password_value);
        if let Some(message) = email_fault {
            email_slot.flash(message);
        }
        if let Some(message) = password_fault {
            password_slot.flash(message);
        }
        if email_fault.is_some() || password_fault.is_some() {
            return;
        }

        busy.set(true);
        request_slot.clear();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let session = session.clone();
            let navigate = navigate.clone();
            async move {
                match crate::net::api::login_user(&email_value, &password_value).await {
                    Ok(response) => match accepted_token(&response) {
                        Some(token) => {
                            session.set_auth_token(&token);
                            navigate(DASHBOARD_PATH, Default::default());
                        }
                        None => {
                            request_slot.flash("Email o password non corretti");
                            busy.set(false);
                        }
                    },
                    Err(err) => {
                        log::error!("login request failed: {err}");
                        request_slot.flash("Errore di connessione. Riprova.");
                        busy.set(false);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__brand">"Fanta Formula uno"</h1>
            <main class="auth-card">
                <div class="auth-card__intro">
                    <h2 class="auth-card__heading">"Accedi"</h2>
                    <p class="auth-card__subtitle">"Inserisci le tue credenziali per accedere"</p>
                </div>
                <Show when=move || request_slot.get().is_some()>
                    <div class="auth-card__alert">
                        <p>{move || request_slot.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Email"</span>
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="mario.rossi@gmail.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                email_slot.clear();
                            }
                        />
                        <Show when=move || email_slot.get().is_some()>
                            <p class="auth-form__error">
                                {move || email_slot.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>
                    <PasswordInput label="Password" value=password error=password_slot />
                    <div class="auth-form__row">
                        <label class="auth-form__remember">
                            <input type="checkbox" />
                            " Ricordami"
                        </label>
                        <a class="auth-form__hint" href="#">"Password dimenticata?"</a>
                    </div>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Accesso in corso..." } else { "Accedi" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Non hai un account? "
                    <a href=REGISTER_PATH>"Registrati"</a>
                </p>
            </main>
        </div>
    }
}

/// Token from a completed login exchange, if the server accepted it.
#[cfg(any(feature = "hydrate", test))]
fn accepted_token(response: &ApiText) -> Option<String> {
    if !response.ok {
        return None;
    }
    token_from_body(&response.body)
}
