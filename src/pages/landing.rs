//! Public landing page with the sign-in / sign-up entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;
use crate::components::auth_modal::{AuthMode, AuthModal};

/// Landing page — the only route anonymous visitors see. Authenticated
/// users (including restored sessions) are sent to the dashboard.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let authenticated = session.with(|s| s.is_ready() && s.is_authenticated());
            if authenticated {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let auth_mode = RwSignal::new(None::<AuthMode>);
    let on_auth_success = Callback::new(move |()| {
        navigate("/dashboard", NavigateOptions::default());
    });

    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"Sahay"</span>
                <div class="landing__actions">
                    <button class="btn" on:click=move |_| auth_mode.set(Some(AuthMode::SignIn))>
                        "Sign In"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| auth_mode.set(Some(AuthMode::SignUp))
                    >
                        "Get Started"
                    </button>
                </div>
            </header>

            <main class="landing__hero">
                <h1>"Help finds a way"</h1>
                <p>
                    "Sahay connects people affected by disasters with volunteers "
                    "ready to help. Post a request, or lend a hand."
                </p>
                <div class="landing__hero-actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| auth_mode.set(Some(AuthMode::SignUp))
                    >
                        "Request Help"
                    </button>
                    <button class="btn" on:click=move |_| auth_mode.set(Some(AuthMode::SignUp))>
                        "Volunteer"
                    </button>
                </div>
            </main>

            <AuthModal mode=auth_mode on_success=on_auth_success/>
        </div>
    }
}
