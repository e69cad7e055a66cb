//! Domain model for volunteer records and logged hours.
//!
//! # Responsibility
//! - Define the canonical data structures the store persists.
//! - Own the comma-joined skills encoding used by the storage schema.
//!
//! # Invariants
//! - Every volunteer is identified by an externally supplied `VolunteerId`.
//! - Hour entries are append-only; there is no update/delete lifecycle.

pub mod volunteer;
