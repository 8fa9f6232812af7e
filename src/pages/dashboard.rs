//! Dashboard: greets the user and lists their own help requests.

use leptos::prelude::*;

use crate::app::SessionSignal;
use crate::components::navigation::Navigation;
use crate::components::request_card::RequestCard;
use crate::net::types::{HelpRequest, Role};

/// Dashboard page. Requesters see their own requests (the backend lists
/// all requests; ownership is filtered client-side by `user_id`) and a
/// shortcut to post a new one; volunteers get a shortcut to browse.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    super::redirect_if_anonymous(session);

    let my_requests = LocalResource::new(move || {
        let identity = session.with(|s| s.token().map(|t| (t.to_owned(), s.user().map(|u| u.id))));
        async move {
            let Some((token, Some(user_id))) = identity else {
                return Vec::new();
            };
            crate::net::api::fetch_requests(&token)
                .await
                .unwrap_or_default()
                .into_iter()
                .filter(|req: &HelpRequest| req.user_id == user_id)
                .collect()
        }
    });

    let username = move || session.with(|s| s.user().map(|u| u.username.clone()));
    let role = move || session.with(|s| s.user().map(|u| u.role));

    view! {
        <div class="page dashboard-page">
            <Navigation/>

            <Show
                when=move || session.with(|s| s.is_ready() && s.is_authenticated())
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <main class="page__content">
                    <header class="page__header">
                        <h1>{move || format!("Welcome back, {}", username().unwrap_or_default())}</h1>
                        <Show when=move || role() == Some(Role::Requester)>
                            <a class="btn btn--primary" href="/request-help">
                                "+ Request Help"
                            </a>
                        </Show>
                        <Show when=move || role() == Some(Role::Volunteer)>
                            <a class="btn btn--primary" href="/volunteer/requests">
                                "Browse Requests"
                            </a>
                        </Show>
                    </header>

                    <section class="dashboard-page__requests">
                        <h2>"Your requests"</h2>
                        <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                            {move || {
                                my_requests
                                    .get()
                                    .map(|list| {
                                        if list.is_empty() {
                                            view! {
                                                <p class="page__empty">
                                                    "No requests yet."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="page__grid">
                                                    {list
                                                        .into_iter()
                                                        .map(|req| view! { <RequestCard request=req/> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </section>
                </main>
            </Show>
        </div>
    }
}
