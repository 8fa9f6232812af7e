//! Card component for a single help request.

use leptos::prelude::*;

use crate::net::api::photo_url;
use crate::net::types::HelpRequest;

/// The date portion of an ISO timestamp, for compact display.
fn posted_on(created_at: &str) -> String {
    created_at
        .split('T')
        .next()
        .unwrap_or(created_at)
        .to_owned()
}

/// A help-request card with urgency badge, optional photo, and an
/// optional apply action (volunteer views only).
#[component]
pub fn RequestCard(
    request: HelpRequest,
    #[prop(optional, into)] on_apply: Option<Callback<i64>>,
    #[prop(optional)] applying: bool,
) -> impl IntoView {
    let HelpRequest {
        id,
        title,
        description,
        location,
        urgency_level,
        photo,
        created_at,
        user_id: _,
    } = request;

    let badge_class = format!("request-card__badge request-card__badge--{urgency_level}");

    view! {
        <article class="request-card">
            <header class="request-card__header">
                <h3 class="request-card__title">{title}</h3>
                <span class=badge_class>{urgency_level.to_string()}</span>
            </header>

            <p class="request-card__description">{description}</p>

            {photo
                .map(|filename| {
                    view! {
                        <img
                            class="request-card__photo"
                            src=photo_url(&filename)
                            alt="Photo attached to this request"
                        />
                    }
                })}

            <footer class="request-card__meta">
                <span class="request-card__location">{location}</span>
                <span class="request-card__date">{posted_on(&created_at)}</span>

                {on_apply
                    .map(|on_apply| {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=applying
                                on:click=move |_| on_apply.run(id)
                            >
                                {if applying { "Applying..." } else { "Offer to Help" }}
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}
