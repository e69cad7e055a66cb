//! Volunteer and hours-entry domain records.
//!
//! # Responsibility
//! - Define the records exchanged between callers and the record store.
//! - Provide the skills comma-codec so every consumer splits/joins the
//!   stored text the same way.
//!
//! # Invariants
//! - `id` is supplied by the caller and never rewritten by core code.
//! - Updates replace all four mutable fields wholesale; nothing merges.
//! - A skill containing a literal comma corrupts list boundaries on
//!   reload. Known storage limitation, kept for compatibility with
//!   existing databases.

use serde::{Deserialize, Serialize};

/// Externally supplied stable identifier for a volunteer.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type VolunteerId = String;

/// Canonical volunteer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    /// Caller-chosen unique id, the storage primary key.
    pub id: VolunteerId,
    pub name: String,
    pub email: String,
    pub contact_info: String,
    /// Ordered skills list; persisted via [`join_skills`]/[`split_skills`].
    pub skills: Vec<String>,
}

impl Volunteer {
    /// Creates a volunteer record from already-validated field values.
    pub fn new(
        id: impl Into<VolunteerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        contact_info: impl Into<String>,
        skills: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            contact_info: contact_info.into(),
            skills,
        }
    }
}

/// One logged block of volunteer work.
///
/// Append-only: entries are never updated or deleted once stored, and they
/// deliberately survive removal of their volunteer in the default
/// integrity mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursEntry {
    /// `YYYY-MM-DD` by convention; calendar correctness is not checked.
    pub date: String,
    /// Parsed from caller text; zero and negative values are accepted.
    pub hours_worked: f64,
    pub description: String,
}

impl HoursEntry {
    /// Creates an hours entry from already-validated field values.
    pub fn new(
        date: impl Into<String>,
        hours_worked: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            hours_worked,
            description: description.into(),
        }
    }
}

/// Encodes a skills list into the single TEXT column the store persists.
///
/// Lossy for skills containing literal commas; callers that need exact
/// round trips must keep commas out of individual skills.
pub fn join_skills(skills: &[String]) -> String {
    skills.join(",")
}

/// Decodes the stored TEXT column back into a skills list.
///
/// Inverse of [`join_skills`] for comma-free skills. The empty string
/// decodes to one empty skill rather than an empty list, matching how the
/// storage text splits.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
