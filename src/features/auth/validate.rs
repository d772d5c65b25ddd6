//! Pure form validation. These checks are idempotent, perform no I/O, and
//! run both on field blur and again on submit.

use regex::Regex;
use std::fmt;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Why a field failed validation. `Display` renders the inline message shown
/// next to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmail,
    PasswordTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidEmail => write!(formatter, "Invalid email format"),
            FieldError::PasswordTooShort => write!(
                formatter,
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Basic email format check: email-shaped, not RFC-5322.
fn email_shaped(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Accepts strings with exactly one `@`, no whitespace, and a dotted suffix
/// after the `@`.
pub fn validate_email(candidate: &str) -> Result<(), FieldError> {
    if email_shaped(candidate) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Accepts passwords of at least [`MIN_PASSWORD_LENGTH`] characters, counted
/// as Unicode scalar values with no normalization.
pub fn validate_password(candidate: &str) -> Result<(), FieldError> {
    if candidate.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(FieldError::PasswordTooShort)
    }
}

/// Per-field verdicts produced by the submit path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldVerdicts {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldVerdicts {
    pub fn all_clear(self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Email failures take precedence when both fields are invalid.
    pub fn first_error(self) -> Option<FieldError> {
        self.email.or(self.password)
    }
}

/// Runs both field checks and collects the verdicts.
pub fn check_credentials(email: &str, password: &str) -> FieldVerdicts {
    FieldVerdicts {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
    }
}
