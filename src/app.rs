//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    all_requests::AllRequestsPage, dashboard::DashboardPage, landing::LandingPage,
    profile::ProfilePage, request_help::RequestHelpPage,
    volunteer_requests::VolunteerRequestsPage,
};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Shared session handle provided to every page via context.
pub type SessionSignal = RwSignal<SessionStore<BrowserStorage>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Owns the session store, provides it via context, kicks off session
/// restoration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionSignal = RwSignal::new(SessionStore::new(BrowserStorage));
    provide_context(session);

    // Restore any persisted session once at startup. `begin_restore`
    // either finishes synchronously (no token, zero network calls) or
    // hands back a token to validate against the profile endpoint.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let pending = session.try_update(SessionStore::begin_restore).flatten();
            if let Some(token) = pending {
                let profile = crate::net::api::fetch_profile(&token).await;
                if let Err(err) = &profile {
                    log::warn!("session restore failed: {err}");
                }
                session.update(|s| s.finish_restore(profile.ok()));
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/sahay-ui.css"/>
        <Title text="Sahay"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("request-help") view=RequestHelpPage/>
                <Route path=StaticSegment("all-requests") view=AllRequestsPage/>
                <Route
                    path=(StaticSegment("volunteer"), StaticSegment("requests"))
                    view=VolunteerRequestsPage
                />
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
