//! Form for posting a new help request, with optional photo attachment.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;
use crate::components::navigation::Navigation;
use crate::net::types::{NewHelpRequest, UrgencyLevel};

#[cfg(feature = "hydrate")]
type SelectedPhoto = web_sys::File;
#[cfg(not(feature = "hydrate"))]
type SelectedPhoto = ();

fn photo_name(photo: &SelectedPhoto) -> String {
    #[cfg(feature = "hydrate")]
    {
        photo.name()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = photo;
        String::new()
    }
}

/// Request-help page. Validates required fields client-side, submits the
/// multipart form, and returns to the dashboard after a short
/// confirmation.
#[component]
pub fn RequestHelpPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    super::redirect_if_anonymous(session);
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let urgency = RwSignal::new("medium".to_owned());
    // `web_sys::File` is not `Send`; keep the selection thread-local.
    let photo = RwSignal::new_local(None::<SelectedPhoto>);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);

    let on_photo = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            photo.set(input.files().and_then(|files| files.item(0)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
            photo.set(None);
        }
    };

    let submit = move || {
        if loading.get_untracked() {
            return;
        }
        let fields = NewHelpRequest {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            urgency_level: UrgencyLevel::parse_or_default(&urgency.get_untracked()),
        };
        if let Some(field) = fields.missing_field() {
            error.set(format!("Please fill in the {field} field."));
            return;
        }
        error.set(String::new());
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let token = session.with_untracked(|s| s.token().map(ToOwned::to_owned));
            let Some(token) = token else {
                loading.set(false);
                return;
            };
            let attachment = photo.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_request(&token, &fields, attachment).await {
                    Ok(_) => {
                        success.set(true);
                        gloo_timers::future::TimeoutFuture::new(1500).await;
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message().to_owned());
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            loading.set(false);
        }
    };

    view! {
        <div class="page request-help-page">
            <Navigation/>

            <main class="page__content page__content--narrow">
                <header class="page__header">
                    <h1>"Request Help"</h1>
                    <p>"Describe your situation and connect with volunteers who can help."</p>
                </header>

                <Show when=move || success.get()>
                    <p class="page__success">"Request posted. Taking you back to your dashboard..."</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>

                <form
                    class="request-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <label class="request-form__label">
                        "Title"
                        <input
                            class="request-form__input"
                            type="text"
                            placeholder="What do you need?"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="request-form__label">
                        "Description"
                        <textarea
                            class="request-form__input"
                            rows="5"
                            placeholder="Describe your situation"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="request-form__label">
                        "Location"
                        <input
                            class="request-form__input"
                            type="text"
                            placeholder="Neighborhood, city"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="request-form__label">
                        "Urgency"
                        <select
                            class="request-form__input"
                            prop:value=move || urgency.get()
                            on:change=move |ev| urgency.set(event_target_value(&ev))
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </label>

                    <label class="request-form__label">
                        "Photo (optional)"
                        <input class="request-form__input" type="file" accept="image/*" on:change=on_photo/>
                        {move || photo.with(|p| p.as_ref().map(|p| {
                            view! { <span class="request-form__filename">{photo_name(p)}</span> }
                        }))}
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
