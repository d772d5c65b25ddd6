//! Accesso — a client-side demo login form.
//!
//! Input validation, a simulated asynchronous authentication call, session
//! persistence to browser storage, and basic UI feedback. There is no real
//! authentication and no security boundary: any well-formed email paired
//! with a six-character password succeeds. The session record is a UI
//! convenience, never a credential.
//!
//! Browser-only code (storage backends, timers, the Leptos UI) is gated
//! behind `target_arch = "wasm32"`; the validation and session lifecycle
//! logic compiles and is tested natively.

#[cfg(target_arch = "wasm32")]
mod app;
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

pub use features::auth::session::{logout, perform_login};
pub use features::auth::store::{MemoryStore, SessionStore, SessionVault, SESSION_KEY};
pub use features::auth::types::{LoginPhase, LoginRequest, SessionRecord};
pub use features::auth::validate::{
    check_credentials, validate_email, validate_password, FieldError, FieldVerdicts,
};

/// Mounts the application to the document body.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("auth module loaded");
    leptos::prelude::mount_to_body(app::App);
}
