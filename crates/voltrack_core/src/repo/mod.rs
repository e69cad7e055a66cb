//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the record-store contract callers program against.
//! - Isolate SQLite statement details from service orchestration.
//!
//! # Invariants
//! - Duplicate primary keys surface as a semantic error, not a raw SQLite
//!   failure.
//! - Update/remove against an absent id succeed silently; existence
//!   checking belongs to the caller flows.

pub mod volunteer_repo;
