//! Route guard for views that require an active session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

/// Wraps a protected view. Renders nothing while the session store is
/// still resolving the persisted token, the wrapped view once a session is
/// present, and redirects to `/login` otherwise. Holds no state of its own.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    // Redirect only once initialization has resolved; before that a
    // persisted session may still be about to appear.
    Effect::new(move || {
        let state = session.state().get();
        if !state.loading && state.claims.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.state().get().claims.is_some() fallback=|| ()>
            {children()}
        </Show>
    }
}
