//! Top navigation bar with role-dependent links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;
use crate::net::types::Role;

/// Fixed top bar shown to authenticated users. Anonymous visitors (and
/// the not-yet-ready restoration window) get nothing — the landing page
/// carries its own header.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let role = move || session.with(|s| s.user().map(|u| u.role));

    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate("/", NavigateOptions::default());
    };

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            <header class="nav">
                <nav class="nav__inner">
                    <a class="nav__brand" href="/dashboard">"Sahay"</a>

                    <div class="nav__links">
                        <a class="nav__link" href="/dashboard">"Dashboard"</a>
                        <Show when=move || role() == Some(Role::Requester)>
                            <a class="nav__link" href="/request-help">"Request Help"</a>
                        </Show>
                        <Show when=move || role() == Some(Role::Volunteer)>
                            <a class="nav__link" href="/volunteer/requests">"Help Requests"</a>
                        </Show>
                        <a class="nav__link" href="/all-requests">"All Requests"</a>
                        <a class="nav__link" href="/profile">"Profile"</a>
                    </div>

                    <div class="nav__session">
                        <span class="nav__username">
                            {move || session.with(|s| s.user().map(|u| u.username.clone()))}
                        </span>
                        <button class="btn" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </nav>
            </header>
        </Show>
    }
}
