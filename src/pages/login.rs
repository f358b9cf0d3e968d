//! Login page: username/password form delegating to the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

/// Login form. Success navigates to the dashboard; failure shows the
/// message returned by the session store inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .login(username.get_untracked(), password.get_untracked())
                    .await;
                pending.set(false);
                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(message) => error.set(Some(message)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
            let _ = &navigate;
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
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
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
