//! Sidebar layout primitives: provider, rail, trigger, and inset.
//!
//! SYSTEM CONTEXT
//! ==============
//! The league screens share a collapsible navigation shell.
//! [`SidebarProvider`] owns the `RwSignal<SidebarState>`, shares it through
//! context, and keeps the viewport classification current with a
//! media-query listener; the other components here are thin views over that
//! signal.

use leptos::prelude::*;

use crate::state::sidebar::SidebarState;

#[cfg(feature = "hydrate")]
const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Sidebar state provided by the nearest [`SidebarProvider`].
pub fn use_sidebar() -> RwSignal<SidebarState> {
    expect_context::<RwSignal<SidebarState>>()
}

/// Owns the sidebar state machine for one page shell.
#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(SidebarState::default());
    provide_context(state);

    #[cfg(feature = "hydrate")]
    install_viewport_watch(state);

    view! { <div class="sidebar-layout">{children()}</div> }
}

/// The navigation rail plus the mobile backdrop overlay.
#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    let state = use_sidebar();

    view! {
        <Show when=move || state.get().mobile_open>
            <div
                class="sidebar-backdrop"
                on:click=move |_| state.update(SidebarState::close_mobile)
            ></div>
        </Show>
        <aside
            class="sidebar"
            class:sidebar--collapsed=move || {
                let current = state.get();
                current.is_desktop && current.collapsed
            }
            class:sidebar--open=move || state.get().mobile_open
        >
            {children()}
        </aside>
    }
}

/// Hamburger button flipping whichever collapse axis the viewport uses.
#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let state = use_sidebar();

    view! {
        <button
            class="sidebar-trigger"
            aria-label="Apri o chiudi il menu"
            on:click=move |_| state.update(SidebarState::toggle)
        >
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="5" x2="17" y2="5" />
                <line x1="3" y1="10" x2="17" y2="10" />
                <line x1="3" y1="15" x2="17" y2="15" />
            </svg>
        </button>
    }
}

/// Main content area beside the rail.
#[component]
pub fn SidebarInset(children: Children) -> impl IntoView {
    view! { <main class="sidebar-inset">{children()}</main> }
}

/// Classify the viewport now and on every breakpoint crossing. The listener
/// lives until the owning scope is cleaned up.
#[cfg(feature = "hydrate")]
fn install_viewport_watch(state: RwSignal<SidebarState>) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(query)) = window.match_media(DESKTOP_MEDIA_QUERY) else {
        return;
    };

    state.update(|current| current.set_desktop(query.matches()));

    let listener = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        state.update(|current| current.set_desktop(event.matches()));
    }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

    if query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    on_cleanup(move || {
        let _ = query
            .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    });
}
