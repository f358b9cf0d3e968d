//! Card rendering a current-weather snapshot.

use leptos::prelude::*;

use crate::net::types::WeatherSnapshot;

/// Shows the five snapshot fields verbatim.
#[component]
pub fn WeatherCard(snapshot: WeatherSnapshot) -> impl IntoView {
    view! {
        <div class="weather-card">
            <p>
                <strong>"Source: "</strong>
                {snapshot.source}
            </p>
            <p>
                <strong>"Temperature: "</strong>
                {format!("{}°C", snapshot.temp)}
            </p>
            <p>
                <strong>"Humidity: "</strong>
                {format!("{}%", snapshot.humidity)}
            </p>
            <p>
                <strong>"Wind Speed: "</strong>
                {format!("{} km/h", snapshot.wind_speed)}
            </p>
            <p>
                <strong>"Condition: "</strong>
                {snapshot.description}
            </p>
        </div>
    }
}
