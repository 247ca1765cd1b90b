//! Client-side authentication for a browser-delivered web application.
//!
//! This crate owns the client half of the auth flow: validating form input,
//! calling the sign-up/sign-in endpoints, holding the resulting session in
//! an observable store, and persisting the session token in `localStorage`
//! so a reload restores the session. The UI layer consuming this crate
//! decides when to take each step; the HTTP server it talks to is a separate
//! system.
//!
//! Built with the `hydrate` feature, the crate targets the browser (real
//! HTTP and real storage). Without it, network calls report themselves
//! unavailable and storage reads as empty, so server-side rendering stays
//! deterministic.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | HTTP client for the sign-up/sign-in endpoints |
//! | [`error`] | Error taxonomy for API calls |
//! | [`session`] | Observable session store and state snapshot |
//! | [`token`] | Session-token persistence (`localStorage` capability) |
//! | [`types`] | Wire DTOs for the auth endpoints |
//! | [`validate`] | Declarative form-input validation |

pub mod api;
pub mod error;
pub mod session;
pub mod token;
pub mod types;
pub mod validate;

/// Install the browser console logger and panic hook.
///
/// Hosts call this once from their hydrate entry point, before anything else
/// logs. Safe to call again; an already-installed logger stays in place.
#[cfg(feature = "hydrate")]
pub fn init_console_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
