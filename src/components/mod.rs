//! Reusable view components.

pub mod protected;
pub mod weather_card;
