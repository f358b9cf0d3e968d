//! Registration page: five-field form with local password confirmation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::register::RegistrationDraft;

/// Registration form. The password match is checked locally before any
/// network call; success navigates to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let draft = RwSignal::new(RegistrationDraft::default());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&current.request()).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("Registration failed: {err}");
                        error.set(Some(crate::state::register::register_failure_message(&err)));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Register"</h2>
                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="auth-card__error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            required=true
                            prop:value=move || draft.get().username
                            on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required=true
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required=true
                            prop:value=move || draft.get().password
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required=true
                            prop:value=move || draft.get().confirm_password
                            on:input=move |ev| {
                                draft.update(|d| d.confirm_password = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="auth-form__label">
                        "Primary Location (City)"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="e.g., London"
                            prop:value=move || draft.get().primary_location
                            on:input=move |ev| {
                                draft.update(|d| d.primary_location = event_target_value(&ev));
                            }
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Register"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
