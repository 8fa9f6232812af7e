//! Every help request, with client-side search and urgency filtering.

use leptos::prelude::*;

use crate::app::SessionSignal;
use crate::components::navigation::Navigation;
use crate::components::request_card::RequestCard;
use crate::net::types::{Role, UrgencyLevel};

/// All-requests page. Search matches title, description, and location;
/// the urgency select narrows further. Volunteers can apply inline.
#[component]
pub fn AllRequestsPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    super::redirect_if_anonymous(session);

    let requests = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(ToOwned::to_owned));
        async move {
            match token {
                Some(token) => crate::net::api::fetch_requests(&token)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let search = RwSignal::new(String::new());
    let urgency_filter = RwSignal::new("all".to_owned());

    let applying_to = RwSignal::new(None::<i64>);
    let applied = RwSignal::new(Vec::<i64>::new());
    let status = RwSignal::new(String::new());

    let is_volunteer = move || session.with(|s| s.user().map(|u| u.role)) == Some(Role::Volunteer);

    let on_apply = Callback::new(move |request_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if applying_to.get_untracked().is_some() {
                return;
            }
            let token = session.with_untracked(|s| s.token().map(ToOwned::to_owned));
            let Some(token) = token else {
                return;
            };
            applying_to.set(Some(request_id));
            status.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::apply_to_request(&token, request_id).await {
                    Ok(()) => {
                        applied.update(|ids| ids.push(request_id));
                        status.set("Application submitted. Thank you for helping!".to_owned());
                    }
                    Err(err) => status.set(err.user_message().to_owned()),
                }
                applying_to.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request_id;
        }
    });

    view! {
        <div class="page all-requests-page">
            <Navigation/>

            <main class="page__content">
                <header class="page__header">
                    <h1>"All Requests"</h1>
                    <p>"Everything the community has asked for, most recent first."</p>
                </header>

                <div class="page__filters">
                    <input
                        class="page__search"
                        type="search"
                        placeholder="Search by title, description, or location"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="page__filter"
                        prop:value=move || urgency_filter.get()
                        on:change=move |ev| urgency_filter.set(event_target_value(&ev))
                    >
                        <option value="all">"All urgencies"</option>
                        <option value="low">"Low"</option>
                        <option value="medium">"Medium"</option>
                        <option value="high">"High"</option>
                    </select>
                </div>

                <Show when=move || !status.get().is_empty()>
                    <p class="page__status">{move || status.get()}</p>
                </Show>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading requests..."</p> }>
                    {move || {
                        requests
                            .get()
                            .map(|list| {
                                let term = search.get();
                                let filter = urgency_filter.get();
                                let visible: Vec<_> = list
                                    .into_iter()
                                    .filter(|req| !applied.get().contains(&req.id))
                                    .filter(|req| req.matches_search(&term))
                                    .filter(|req| {
                                        filter == "all"
                                            || req.urgency_level
                                                == UrgencyLevel::parse_or_default(&filter)
                                    })
                                    .collect();
                                if visible.is_empty() {
                                    view! {
                                        <p class="page__empty">"No requests match."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="page__grid">
                                            {visible
                                                .into_iter()
                                                .map(|req| {
                                                    let id = req.id;
                                                    if is_volunteer() {
                                                        view! {
                                                            <RequestCard
                                                                request=req
                                                                on_apply=on_apply
                                                                applying=applying_to.get() == Some(id)
                                                            />
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! { <RequestCard request=req/> }.into_any()
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
