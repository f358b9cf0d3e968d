//! Browser geolocation wrapped as a single awaitable lookup.
//!
//! `getCurrentPosition` is callback-based; the callbacks are bridged onto a
//! oneshot channel so callers compose the lookup and the weather fetch as
//! two ordinary sequential awaits. Requires a browser environment; the SSR
//! stub reports geolocation as unsupported.

#![allow(clippy::unused_async)]

/// A resolved coordinate pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Failure to resolve the device position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The runtime exposes no geolocation object.
    #[error("geolocation is not supported")]
    Unsupported,
    /// The lookup ran and failed: permission denied, position unavailable,
    /// or timeout. Code and message come from the browser.
    #[error("position lookup failed (code {code}): {message}")]
    Denied { code: u16, message: String },
}

/// Resolve the device's current position.
///
/// At most one lookup is awaited at a time by each caller; there are no
/// cancellation semantics, a fresh call simply starts a fresh lookup.
///
/// # Errors
///
/// Returns [`GeoError::Unsupported`] when the runtime has no geolocation
/// object, or [`GeoError::Denied`] when the browser reports a failure.
pub async fn current_position() -> Result<GeoPoint, GeoError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
        else {
            return Err(GeoError::Unsupported);
        };

        let (tx, rx) = oneshot::channel::<Result<GeoPoint, GeoError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
                let coords = position.coords();
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Ok(GeoPoint {
                        lat: coords.latitude(),
                        lon: coords.longitude(),
                    }));
                }
            })
        };
        let on_error = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(web_sys::PositionError)>::new(move |err: web_sys::PositionError| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(GeoError::Denied {
                        code: err.code(),
                        message: err.message(),
                    }));
                }
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            return Err(GeoError::Unsupported);
        }

        // The closures stay alive across this await, so the browser can
        // still reach them whenever the lookup settles.
        rx.await.unwrap_or(Err(GeoError::Unsupported))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeoError::Unsupported)
    }
}
