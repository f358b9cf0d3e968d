//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::RequireSession;
use crate::pages::{login::LoginPage, register::RegisterPage, weather::WeatherPage};
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing:
/// `/login` and `/register` are public, the root weather dashboard
/// requires an active session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    provide_context(session);

    // Resolve the persisted session exactly once, after the client mounts.
    // Until this runs the session stays in its loading state, which keeps
    // the route guard from redirecting prematurely.
    Effect::new(move || {
        session.initialize();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/farmcast.css"/>
        <Title text="Farmcast"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireSession>
                                <WeatherPage/>
                            </RequireSession>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
