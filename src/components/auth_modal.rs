//! Sign-in / sign-up modal dialog.
//!
//! Sign-in performs the full credential exchange out-of-band of the
//! session store: `POST /login` for a token, then `GET /users/me` with it
//! for the profile, and only hands the already-validated pair to
//! [`SessionStore::login`]. Sign-up posts the account and then switches
//! the dialog to sign-in; it never touches the session.
//!
//! [`SessionStore::login`]: crate::state::session::SessionStore::login

use leptos::prelude::*;

use crate::app::SessionSignal;

/// Which form the modal shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Modal auth dialog. `mode` is owned by the caller; setting it to `None`
/// closes the dialog. `on_success` fires after a completed sign-in.
#[component]
pub fn AuthModal(mode: RwSignal<Option<AuthMode>>, on_success: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionSignal>();

    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let role_value = RwSignal::new("user".to_owned());

    let signup = move || mode.get() == Some(AuthMode::SignUp);

    let toggle_mode = move |_| {
        error.set(String::new());
        notice.set(String::new());
        mode.set(Some(if signup() {
            AuthMode::SignIn
        } else {
            AuthMode::SignUp
        }));
    };

    let submit = move || {
        if loading.get() {
            return;
        }
        error.set(String::new());
        notice.set(String::new());
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::net::types::{Role, SignupForm};

            if signup() {
                let form = SignupForm {
                    email: email.get(),
                    password: password.get(),
                    username: username.get(),
                    phone_number: phone_number.get(),
                    role: if role_value.get() == "volunteer" {
                        Role::Volunteer
                    } else {
                        Role::Requester
                    },
                };
                leptos::task::spawn_local(async move {
                    match api::sign_up(&form).await {
                        Ok(_) => {
                            password.set(String::new());
                            notice.set("Account created. Please sign in.".to_owned());
                            mode.set(Some(AuthMode::SignIn));
                        }
                        Err(err) => error.set(err.user_message().to_owned()),
                    }
                    loading.set(false);
                });
            } else {
                let (email, password) = (email.get(), password.get());
                leptos::task::spawn_local(async move {
                    let outcome = async {
                        let token = api::sign_in(&email, &password).await?;
                        let user = api::fetch_profile(&token.access_token).await?;
                        Ok::<_, api::ApiError>((token.access_token, user))
                    }
                    .await;
                    match outcome {
                        Ok((token, user)) => {
                            session.update(|s| s.login(token, user));
                            mode.set(None);
                            on_success.run(());
                        }
                        Err(err) => error.set(err.user_message().to_owned()),
                    }
                    loading.set(false);
                });
            }
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, on_success);
            loading.set(false);
        }
    };

    view! {
        <Show when=move || mode.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| mode.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">
                        {move || if signup() { "Join Sahay" } else { "Welcome Back" }}
                    </h2>

                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="dialog__notice">{move || notice.get()}</p>
                    </Show>

                    <form
                        class="dialog__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                placeholder="you@example.com"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <Show when=signup>
                            <label class="dialog__label">
                                "Username"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="your_username"
                                    required
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="dialog__label">
                                "Phone Number"
                                <input
                                    class="dialog__input"
                                    type="tel"
                                    placeholder="+1 (555) 000-0000"
                                    required
                                    prop:value=move || phone_number.get()
                                    on:input=move |ev| phone_number.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="dialog__label">
                                "I am a"
                                <select
                                    class="dialog__input"
                                    prop:value=move || role_value.get()
                                    on:change=move |ev| role_value.set(event_target_value(&ev))
                                >
                                    <option value="user">"Person Needing Help"</option>
                                    <option value="volunteer">"Volunteer"</option>
                                </select>
                            </label>
                        </Show>

                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                placeholder="••••••••"
                                required
                                minlength="6"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                            {move || match (signup(), loading.get()) {
                                (true, true) => "Creating account...",
                                (true, false) => "Create Account",
                                (false, true) => "Signing in...",
                                (false, false) => "Sign In",
                            }}
                        </button>
                    </form>

                    <p class="dialog__footer">
                        {move || {
                            if signup() { "Already have an account? " } else { "Don't have an account? " }
                        }}
                        <button type="button" class="dialog__switch" on:click=toggle_mode>
                            {move || if signup() { "Sign in" } else { "Sign up" }}
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}
