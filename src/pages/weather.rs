//! Weather dashboard: the protected root view.
//!
//! On mount the page geolocates the device and fetches the current
//! weather, as two sequential awaits. Every failure renders a message and
//! a manual "Retry" control that restarts the same sequence; there is no
//! automatic retry, no timeout handling, and no caching across retries.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::weather_card::WeatherCard;
use crate::state::session::SessionContext;
use crate::state::weather::WeatherPhase;

/// Dashboard page showing the current weather for the device's location.
#[component]
pub fn WeatherPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let phase = RwSignal::new(WeatherPhase::default());

    let load = move || {
        phase.set(WeatherPhase::Loading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let point = match crate::util::geo::current_position().await {
                Ok(point) => point,
                Err(err) => {
                    leptos::logging::warn!("Geolocation failed: {err}");
                    phase.set(WeatherPhase::failed_from_geo(&err));
                    return;
                }
            };
            match crate::net::api::fetch_current_weather(point.lat, point.lon).await {
                Ok(snapshot) => phase.set(WeatherPhase::Ready(snapshot)),
                Err(err) => {
                    leptos::logging::warn!("Weather fetch failed: {err}");
                    phase.set(WeatherPhase::failed_from_fetch(&err));
                }
            }
        });
    };

    // First lookup after mount; "Retry" repeats the same sequence.
    Effect::new(move || load());

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="weather-page">
            <header class="weather-page__header">
                <h2>"Current Weather"</h2>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            {move || match phase.get() {
                WeatherPhase::Loading => {
                    view! { <p class="weather-page__status">"Locating your farm..."</p> }
                        .into_any()
                }
                WeatherPhase::Ready(snapshot) => {
                    view! { <WeatherCard snapshot=snapshot/> }.into_any()
                }
                WeatherPhase::Failed(message) => {
                    view! {
                        <div class="weather-page__failure">
                            <p class="weather-page__error">{message}</p>
                            <button class="btn btn--primary" on:click=move |_| load()>
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
