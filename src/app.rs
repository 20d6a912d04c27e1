//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, league_create::LeagueCreatePage, league_detail::LeagueDetailPage,
    league_drivers::LeagueDriversPage, league_join::LeagueJoinPage, login::LoginPage,
    register::RegisterPage,
};
use crate::util::session_store::SessionStore;

pub const LOGIN_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LEAGUE_CREATE_PATH: &str = "/league/create";
pub const LEAGUE_JOIN_PATH: &str = "/league/join";
pub const LEAGUE_DETAIL_PATH: &str = "/league/detail";
pub const LEAGUE_DRIVERS_PATH: &str = "/league/drivers";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="it">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The single process-wide session store behind the injectable interface.
    provide_context(SessionStore::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/pitwall.css"/>
        <Title text="Fanta Formula uno"/>

        <Router>
            <Routes fallback=|| "Pagina non trovata.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("league"), StaticSegment("create"))
                    view=LeagueCreatePage
                />
                <Route path=(StaticSegment("league"), StaticSegment("join")) view=LeagueJoinPage/>
                <Route
                    path=(StaticSegment("league"), StaticSegment("detail"))
                    view=LeagueDetailPage
                />
                <Route
                    path=(StaticSegment("league"), StaticSegment("drivers"))
                    view=LeagueDriversPage
                />
            </Routes>
        </Router>
    }
}
