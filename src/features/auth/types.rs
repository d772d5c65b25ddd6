//! Session record and submission lifecycle types.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Persisted session summary. Pre-fills the UI after a reload; it is not an
/// authentication credential and its validity is never checked.
pub struct SessionRecord {
    pub email: String,
    /// ISO-8601 creation timestamp. Set once, never mutated.
    #[serde(rename = "loginTime")]
    pub login_time: String,
    /// Chosen at creation; selects the storage scope the record lives in.
    pub remember: bool,
}

#[derive(Clone, Debug)]
/// Captures login form input for the async action without borrowing signals.
pub struct LoginRequest {
    pub email: String,
    /// Carried for parity with a real call; the demo accepts any value once
    /// form validation passes.
    pub password: String,
    pub remember: bool,
}

/// Submission lifecycle of the login form.
///
/// `Failed` and `Succeeded` are not terminal: the form is enabled again after
/// each outcome, until the post-success navigation unloads the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl LoginPhase {
    /// The submit control is locked only while the simulated call is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_record_serializes_with_login_time_field() {
        let record = SessionRecord {
            email: "a@b.co".to_string(),
            login_time: "2026-08-06T10:00:00.000Z".to_string(),
            remember: true,
        };

        let json = serde_json::to_string(&record).expect("Failed to serialize");
        assert!(json.contains("\"loginTime\""));
        assert!(!json.contains("login_time"));
        assert!(json.contains("a@b.co"));
    }

    #[test]
    fn session_record_reads_stored_layout() {
        let json = r#"{"email":"user@example.com","loginTime":"2026-08-06T10:00:00.000Z","remember":false}"#;
        let record: SessionRecord = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(record.email, "user@example.com");
        assert_eq!(record.login_time, "2026-08-06T10:00:00.000Z");
        assert!(!record.remember);
    }

    #[test]
    fn only_submitting_phase_is_busy() {
        assert!(LoginPhase::Submitting.is_busy());
        assert!(!LoginPhase::Idle.is_busy());
        assert!(!LoginPhase::Validating.is_busy());
        assert!(!LoginPhase::Succeeded.is_busy());
        assert!(!LoginPhase::Failed.is_busy());
        assert_eq!(LoginPhase::default(), LoginPhase::Idle);
    }
}
