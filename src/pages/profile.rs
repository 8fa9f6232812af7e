//! Profile page showing the authenticated user's account details.

use leptos::prelude::*;

use crate::app::SessionSignal;
use crate::components::navigation::Navigation;

/// Profile page. The backend has no profile-update endpoint, so edits
/// stay local and saving just acknowledges.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    super::redirect_if_anonymous(session);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    // Seed the form once the restored user record is available.
    Effect::new(move || {
        session.with(|s| {
            if let Some(user) = s.user() {
                username.set(user.username.clone());
                email.set(user.email.clone());
                phone_number.set(user.phone_number.clone().unwrap_or_default());
            }
        });
    });

    let role = move || {
        session.with(|s| s.user().map(|u| u.role.to_string()))
            .unwrap_or_default()
    };

    let on_save = move |_| {
        message.set("Profile updated successfully!".to_owned());
    };

    view! {
        <div class="page profile-page">
            <Navigation/>

            <Show
                when=move || session.with(|s| s.is_ready() && s.is_authenticated())
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <main class="page__content page__content--narrow">
                    <header class="page__header">
                        <h1>"Your Profile"</h1>
                        <span class="profile-page__role">{role}</span>
                    </header>

                    <Show when=move || !message.get().is_empty()>
                        <p class="page__status">{move || message.get()}</p>
                    </Show>

                    <div class="profile-form">
                        <label class="profile-form__label">
                            "Username"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="profile-form__label">
                            "Email"
                            <input
                                class="profile-form__input"
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="profile-form__label">
                            "Phone Number"
                            <input
                                class="profile-form__input"
                                type="tel"
                                prop:value=move || phone_number.get()
                                on:input=move |ev| phone_number.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary" on:click=on_save>
                            "Save Changes"
                        </button>
                    </div>
                </main>
            </Show>
        </div>
    }
}
