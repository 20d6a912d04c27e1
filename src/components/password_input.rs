//! Password field with reveal toggle and inline field error.
//!
//! DESIGN
//! ======
//! Login uses one of these and registration two, each with its own reveal
//! state and error slot, so the toggle state lives inside the component.

use leptos::prelude::*;

use crate::util::form::ErrorSlot;

#[component]
pub fn PasswordInput(
    label: &'static str,
    value: RwSignal<String>,
    error: ErrorSlot,
    #[prop(default = "••••••••")] placeholder: &'static str,
) -> impl IntoView {
    let show = RwSignal::new(false);

    view! {
        <label class="auth-form__field">
            <span class="auth-form__label">{label}</span>
            <div class="auth-form__password">
                <input
                    class="auth-form__input"
                    type=move || if show.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        error.clear();
                    }
                />
                <button
                    class="auth-form__reveal"
                    type="button"
                    aria-label="Mostra o nascondi la password"
                    on:click=move |_| show.update(|visible| *visible = !*visible)
                >
                    {move || render_eye_icon(show.get())}
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

fn render_eye_icon(revealed: bool) -> impl IntoView {
    if revealed {
        view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M2 10 C4 6 7 4 10 4 C13 4 16 6 18 10 C16 14 13 16 10 16 C7 16 4 14 2 10 Z" />
                <line x1="4" y1="16" x2="16" y2="4" />
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M2 10 C4 6 7 4 10 4 C13 4 16 6 18 10 C16 14 13 16 10 16 C7 16 4 14 2 10 Z" />
                <circle cx="10" cy="10" r="2.5" />
            </svg>
        }
        .into_any()
    }
}
