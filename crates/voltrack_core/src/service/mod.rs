//! Core use-case services.
//!
//! # Responsibility
//! - Chain validation and store calls into the flows a front end drives.
//! - Keep UI layers decoupled from storage and validation details.

pub mod volunteer_service;
