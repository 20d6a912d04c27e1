//! Card for one league entry on the dashboard grid.
//!
//! DESIGN
//! ======
//! Opening goes through a callback instead of a plain link: the dashboard
//! must persist the selection before navigating.

use leptos::prelude::*;

use crate::net::types::LeagueSummary;

#[component]
pub fn LeagueCard(
    league: LeagueSummary,
    #[prop(optional)] last_opened: bool,
    on_open: Callback<String>,
) -> impl IntoView {
    let id = league.id.clone();

    view! {
        <div class="league-card" class:league-card--last=last_opened>
            <div class="league-card__head">
                <p class="league-card__eyebrow">"Lega"</p>
                <h2 class="league-card__name">{league.name}</h2>
                <Show when=move || last_opened>
                    <span class="league-card__badge">"Ultima aperta"</span>
                </Show>
            </div>
            <button class="league-card__enter" on:click=move |_| on_open.run(id.clone())>
                "Entra nella lega"
            </button>
        </div>
    }
}
