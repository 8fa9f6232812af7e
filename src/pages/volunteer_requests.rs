//! Volunteer browse view over open help requests, with apply actions.

use leptos::prelude::*;

use crate::app::SessionSignal;
use crate::components::navigation::Navigation;
use crate::components::request_card::RequestCard;

/// Volunteer requests page. Lists requests from
/// `/volunteer/view-requests`; a successful application drops the request
/// from the list.
#[component]
pub fn VolunteerRequestsPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    super::redirect_if_anonymous(session);

    let requests = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(ToOwned::to_owned));
        async move {
            match token {
                Some(token) => crate::net::api::fetch_open_requests(&token)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let applying_to = RwSignal::new(None::<i64>);
    let applied = RwSignal::new(Vec::<i64>::new());
    let status = RwSignal::new(String::new());

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
        <div class="page volunteer-requests-page">
            <Navigation/>

            <main class="page__content">
                <header class="page__header">
                    <h1>"Help Requests"</h1>
                    <p>"Browse requests and offer your help to those in need."</p>
                </header>

                <Show when=move || !status.get().is_empty()>
                    <p class="page__status">{move || status.get()}</p>
                </Show>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading requests..."</p> }>
                    {move || {
                        requests
                            .get()
                            .map(|list| {
                                let visible: Vec<_> = list
                                    .into_iter()
                                    .filter(|req| !applied.get().contains(&req.id))
                                    .collect();
                                if visible.is_empty() {
                                    view! {
                                        <p class="page__empty">
                                            "No requests available. Check back later."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="page__grid">
                                            {visible
                                                .into_iter()
                                                .map(|req| {
                                                    let id = req.id;
                                                    view! {
                                                        <RequestCard
                                                            request=req
                                                            on_apply=on_apply
                                                            applying=applying_to.get() == Some(id)
                                                        />
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
