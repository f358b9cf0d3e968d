//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `register`, `weather`) so individual
//! views can depend on small focused models. The session store is the sole
//! mutator of persisted tokens; view-local state never outlives its page.

pub mod register;
pub mod session;
pub mod weather;
