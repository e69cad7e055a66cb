//! Pure input checks applied before records reach the store.
//!
//! # Responsibility
//! - Gate malformed field values at the caller boundary.
//! - Keep every check stateless and store-free.
//!
//! # Invariants
//! - The email check is a permissive shape test (`local@domain.tld`), not
//!   RFC validation; it must accept and reject exactly what the original
//!   desktop app accepted and rejected.
//! - The numeric parse is independent of the emptiness check; empty input
//!   fails as not-a-number, not as a missing field.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// Anchored at the start only: trailing junk after `local@domain.tld` is
// accepted, matching the legacy prefix-match behavior.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid email regex"));

/// Result type for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection reasons for caller-supplied field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field arrived as the empty string.
    EmptyField { field: &'static str },
    /// The value does not match the permissive `local@domain.tld` shape.
    InvalidEmail { value: String },
    /// The hours text does not parse as a number.
    NotANumber { value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "required field is empty: {field}"),
            Self::InvalidEmail { value } => write!(f, "invalid email format: `{value}`"),
            Self::NotANumber { value } => {
                write!(f, "hours worked must be a number, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Fails on the first field whose value is the empty string.
///
/// Whitespace-only values pass; only the literal empty string counts as
/// missing, matching the legacy form checks.
pub fn require_non_empty(fields: &[(&'static str, &str)]) -> ValidationResult<()> {
    for &(field, value) in fields {
        if value.is_empty() {
            return Err(ValidationError::EmptyField { field });
        }
    }
    Ok(())
}

/// Permissive email shape test: one `@` reachable from the start, at least
/// one `.` after it.
///
/// `a@b.c` passes; `a.b.com` and `noatsign` fail. Unicode and other
/// edge-case addresses get no special handling.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Parses caller-typed hours text into a float.
///
/// Surrounding whitespace is tolerated; no range is enforced, so zero and
/// negative values parse successfully.
pub fn parse_hours(text: &str) -> ValidationResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            value: text.to_string(),
        })
}
