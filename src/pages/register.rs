//! Registration page: four-field validation and account creation.
//!
//! DESIGN
//! ======
//! The token comes back under the legacy `token` key contract, so storage
//! uses that key here; every token read elsewhere probes both keys.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::app::DASHBOARD_PATH;
use crate::app::LOGIN_PATH;
use crate::components::password_input::PasswordInput;
#[cfg(any(feature = "hydrate", test))]
use crate::net::api::{ApiText, token_from_body};
use crate::util::form::{ErrorSlot, email_error, password_error};
use crate::util::session_store::SessionStore;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let name_slot = ErrorSlot::new();
    let email_slot = ErrorSlot::new();
    let password_slot = ErrorSlot::new();
    let confirm_slot = ErrorSlot::new();
    let request_slot = ErrorSlot::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = full_name.get();
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = confirm.get();

        let checks = [
            (name_slot, full_name_error(&name_value)),
            (email_slot, email_error(&email_value)),
            (password_slot, password_error(&password_value)),
            (confirm_slot, confirm_error(&password_value, &confirm_value)),
        ];
        let mut failed = false;
        for (slot, fault) in checks {
            if let Some(message) = fault {
                slot.flash(message);
                failed = true;
            }
        }
        if failed {
            return;
        }

        busy.set(true);
        request_slot.clear();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local({
            let session = session.clone();
            let navigate = navigate.clone();
            async move {
                let sent = crate::net::api::register_user(
                    name_value.trim(),
                    email_value.trim(),
                    &password_value,
                )
                .await;
                match sent {
                    Ok(response) => match registration_outcome(&response) {
                        Ok(token) => {
                            session.set_legacy_token(&token);
                            navigate(DASHBOARD_PATH, Default::default());
                        }
                        Err(message) => {
                            request_slot.flash(message);
                            busy.set(false);
                        }
                    },
                    Err(err) => {
                        log::error!("registration request failed: {err}");
                        request_slot.flash("Errore di connessione o email già esistente");
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
                    <h2 class="auth-card__heading">"Registrati"</h2>
                    <p class="auth-card__subtitle">"Crea il tuo account per iniziare"</p>
                </div>
                <Show when=move || request_slot.get().is_some()>
                    <div class="auth-card__alert">
                        <p>{move || request_slot.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__field">
                        <span class="auth-form__label">"Nome completo"</span>
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Mario Rossi"
                            prop:value=move || full_name.get()
                            on:input=move |ev| {
                                full_name.set(event_target_value(&ev));
                                name_slot.clear();
                            }
                        />
                        <Show when=move || name_slot.get().is_some()>
                            <p class="auth-form__error">
                                {move || name_slot.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </label>
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
                    <PasswordInput label="Conferma password" value=confirm error=confirm_slot />
                    <label class="auth-form__terms">
                        <input type="checkbox" />
                        " Accetto i "
                        <a href="#">"termini e condizioni"</a>
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() { "Registrazione in corso..." } else { "Registrati" }
                        }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Hai già un account? "
                    <a href=LOGIN_PATH>"Accedi"</a>
                </p>
            </main>
        </div>
    }
}

fn full_name_error(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Inserisci il tuo nome completo");
    }
    if trimmed.chars().count() < 2 {
        return Some("Il nome deve essere di almeno 2 caratteri");
    }
    None
}

fn confirm_error(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        return Some("Conferma la tua password");
    }
    if confirm != password {
        return Some("Le password non coincidono");
    }
    None
}

/// Map a completed registration exchange to a token or a user-facing error.
#[cfg(any(feature = "hydrate", test))]
fn registration_outcome(response: &ApiText) -> Result<String, &'static str> {
    if !response.ok {
        return Err("Errore di connessione o email già esistente");
    }
    token_from_body(&response.body).ok_or("Errore durante la registrazione")
}
