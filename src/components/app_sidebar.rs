//! League navigation menu rendered inside the sidebar shell.
//!
//! DESIGN
//! ======
//! Menu structure is fixed; only the league title, the active highlight, and
//! the admin entry (super users only) vary. Navigation uses plain anchors so
//! the router handles them, with a click hook that shuts the mobile drawer.

use leptos::prelude::*;

use super::sidebar::use_sidebar;
use crate::app::{LEAGUE_DETAIL_PATH, LEAGUE_DRIVERS_PATH};
use crate::net::types::LeagueDetail;
use crate::state::sidebar::SidebarState;

/// Menu entry highlighted for the current route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarItem {
    Overview,
    Admin,
}

#[component]
pub fn AppSidebar(league: RwSignal<Option<LeagueDetail>>, active: SidebarItem) -> impl IntoView {
    let state = use_sidebar();
    let labels = move || state.get().labels_visible();
    let close_drawer = move |_| state.update(SidebarState::close_mobile);
    let league_name =
        move || league.get().map_or_else(|| "Fanta F1".to_owned(), |detail| detail.name);
    let is_super_user = move || league.get().is_some_and(|detail| detail.is_super_user);

    view! {
        <div class="sidebar__header">
            <Show
                when=labels
                fallback=|| view! { <span class="sidebar__mark">"F1"</span> }
            >
                <p class="sidebar__eyebrow">"Lega attiva"</p>
                <span class="sidebar__title">{league_name}</span>
            </Show>
        </div>
        <nav class="sidebar__nav">
            <a
                class="sidebar__item"
                class:sidebar__item--active=move || active == SidebarItem::Overview
                href=LEAGUE_DETAIL_PATH
                on:click=close_drawer
            >
                {render_overview_icon()}
                <Show when=labels>
                    <span class="sidebar__label">"Panoramica"</span>
                </Show>
            </a>
            <span class="sidebar__item sidebar__item--disabled">
                {render_standings_icon()}
                <Show when=labels>
                    <span class="sidebar__label">"Classifica"</span>
                </Show>
            </span>
            <Show when=is_super_user>
                <a
                    class="sidebar__item"
                    class:sidebar__item--active=move || active == SidebarItem::Admin
                    href=LEAGUE_DRIVERS_PATH
                    on:click=close_drawer
                >
                    {render_admin_icon()}
                    <Show when=labels>
                        <span class="sidebar__label">"Amministrazione"</span>
                    </Show>
                </a>
            </Show>
            <span class="sidebar__item sidebar__item--disabled">
                {render_settings_icon()}
                <Show when=labels>
                    <span class="sidebar__label">"Impostazioni"</span>
                </Show>
            </span>
        </nav>
    }
}

fn render_overview_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M3 9.5 L10 3 L17 9.5" />
            <path d="M5.5 8.5 V16 H14.5 V8.5" />
        </svg>
    }
}

fn render_standings_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M6 3 H14 V8 C14 10.2 12.2 12 10 12 C7.8 12 6 10.2 6 8 Z" />
            <path d="M6 5 H3.5 C3.5 7.5 4.5 9 6 9.3" />
            <path d="M14 5 H16.5 C16.5 7.5 15.5 9 14 9.3" />
            <path d="M8 16.5 H12 M10 12 V16.5" />
        </svg>
    }
}

fn render_admin_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <path d="M12.5 3.5 A4 4 0 0 0 7.7 8.8 L3.5 13 L7 16.5 L11.2 12.3 A4 4 0 0 0 16.5 7.5 L13.5 10 L10 6.5 Z" />
        </svg>
    }
}

fn render_settings_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="10" r="2.5" />
            <path d="M10 3 V5.5 M10 14.5 V17 M3 10 H5.5 M14.5 10 H17 M5 5 L6.8 6.8 M13.2 13.2 L15 15 M15 5 L13.2 6.8 M6.8 13.2 L5 15" />
        </svg>
    }
}
