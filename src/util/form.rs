//! Shared form validation and the auto-clearing inline error slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration validate locally before any network call and show
//! per-field messages that disappear after a short delay or on the next
//! keystroke in that field. The create/join forms reuse the same slot type
//! with sticky messages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

/// How long a flashed field error stays visible.
pub const FIELD_ERROR_CLEAR_MS: u64 = 2500;

/// Validate an email field, returning the message to show when it fails.
///
/// The shape check accepts exactly one `@` with a non-empty local part, no
/// whitespace anywhere, and a domain with an interior dot.
pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Inserisci il tuo indirizzo email");
    }
    if !is_valid_email(email) {
        return Some("Inserisci un indirizzo email valido");
    }
    None
}

/// Validate a password field (required, minimum 6 characters).
pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Inserisci la tua password");
    }
    if password.chars().count() < 6 {
        return Some("La password deve essere di almeno 6 caratteri");
    }
    None
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain_has_interior_dot(domain)
}

fn domain_has_interior_dot(domain: &str) -> bool {
    domain
        .bytes()
        .enumerate()
        .any(|(i, byte)| byte == b'.' && i > 0 && i + 1 < domain.len())
}

/// One inline error message with optional timed auto-clear.
///
/// `flash` shows a message that clears itself after
/// [`FIELD_ERROR_CLEAR_MS`] unless something else wrote the slot in the
/// meantime; `show` is sticky until cleared. Each mutation bumps an epoch so
/// a stale timer never wipes a newer message.
#[derive(Clone, Copy)]
pub struct ErrorSlot {
    message: RwSignal<Option<String>>,
    epoch: RwSignal<u64>,
}

impl Default for ErrorSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    /// Current message; reactive when read inside a tracking context.
    pub fn get(&self) -> Option<String> {
        self.message.get()
    }

    /// Show `text` until cleared or overwritten.
    pub fn show(&self, text: impl Into<String>) {
        self.epoch.update(|epoch| *epoch += 1);
        self.message.set(Some(text.into()));
    }

    /// Show `text` and schedule the timed auto-clear. The timer only runs in
    /// the browser; on the server this behaves like [`ErrorSlot::show`].
    pub fn flash(&self, text: impl Into<String>) {
        self.show(text);
        #[cfg(feature = "hydrate")]
        {
            let slot = *self;
            let stamp = self.epoch.get_untracked();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(FIELD_ERROR_CLEAR_MS))
                    .await;
                // try_* forms: the owning page may have unmounted by now.
                if slot.epoch.try_get_untracked() == Some(stamp) {
                    slot.message.try_set(None);
                }
            });
        }
    }

    pub fn clear(&self) {
        self.epoch.update(|epoch| *epoch += 1);
        self.message.set(None);
    }
}
