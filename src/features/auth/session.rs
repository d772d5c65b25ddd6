//! Simulated login call and session lifecycle operations. There is no
//! backend: the call always succeeds after a fixed delay, and the password
//! is never inspected beyond form validation.

use crate::features::auth::store::SessionVault;
use crate::features::auth::types::{LoginRequest, SessionRecord};
use chrono::{SecondsFormat, Utc};

/// Fixed latency of the simulated authentication call.
pub const SIMULATED_LATENCY_MS: u32 = 1_500;

/// Runs the simulated authentication call and persists the resulting session
/// record to the scope selected by `request.remember`.
///
/// The future carries no cancellation handle: dropping it before the delay
/// fires abandons the attempt with nothing written.
pub async fn perform_login(vault: &SessionVault, request: &LoginRequest) -> SessionRecord {
    simulated_latency().await;

    let record = SessionRecord {
        email: request.email.clone(),
        login_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        remember: request.remember,
    };
    vault.persist(&record);
    log::info!(
        "session for {} saved to {} storage",
        record.email,
        if record.remember { "durable" } else { "tab" }
    );
    record
}

/// Deletes the session record from both storage scopes. Beyond that, calling
/// this with no stored record is a no-op.
pub fn logout(vault: &SessionVault) {
    vault.clear();
    log::info!("user logged out");
}

#[cfg(target_arch = "wasm32")]
async fn simulated_latency() {
    gloo_timers::future::TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn simulated_latency() {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn request(email: &str, remember: bool) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: "abc123".to_string(),
            remember,
        }
    }

    #[tokio::test]
    async fn login_without_remember_lands_in_tab_scope() {
        let vault = SessionVault::in_memory();
        let record = perform_login(&vault, &request("a@b.co", false)).await;

        assert_eq!(record.email, "a@b.co");
        assert!(!record.remember);
        assert_eq!(vault.durable().get(), None);
        assert_eq!(vault.ephemeral().get(), Some(record));
    }

    #[tokio::test]
    async fn login_with_remember_lands_in_durable_scope() {
        let vault = SessionVault::in_memory();
        let record = perform_login(&vault, &request("a@b.co", true)).await;

        assert!(record.remember);
        assert_eq!(vault.ephemeral().get(), None);
        assert_eq!(vault.durable().get(), Some(record));
    }

    #[tokio::test]
    async fn login_time_is_iso8601() {
        let vault = SessionVault::in_memory();
        let record = perform_login(&vault, &request("a@b.co", false)).await;

        assert!(DateTime::parse_from_rfc3339(&record.login_time).is_ok());
        assert!(record.login_time.ends_with('Z'));
    }

    #[tokio::test]
    async fn remembered_session_survives_for_restore() {
        let vault = SessionVault::in_memory();
        perform_login(&vault, &request("kept@b.co", true)).await;

        // A reload constructs a fresh context over the same scopes; restore
        // is what pre-fills the email field.
        assert_eq!(vault.restore().map(|r| r.email), Some("kept@b.co".to_string()));
    }

    #[tokio::test]
    async fn logout_clears_both_scopes() {
        let vault = SessionVault::in_memory();
        perform_login(&vault, &request("tab@b.co", false)).await;
        perform_login(&vault, &request("kept@b.co", true)).await;

        logout(&vault);
        assert_eq!(vault.durable().get(), None);
        assert_eq!(vault.ephemeral().get(), None);
    }

    #[test]
    fn logout_with_no_session_is_a_noop() {
        let vault = SessionVault::in_memory();
        logout(&vault);
        assert_eq!(vault.restore(), None);
    }
}
