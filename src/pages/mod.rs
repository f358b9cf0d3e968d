//! Top-level routed views.

pub mod login;
pub mod register;
pub mod weather;
