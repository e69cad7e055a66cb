//! Core domain logic for VolTrack.
//! This crate is the single source of truth for volunteer records,
//! hour logging, and report rendering.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::volunteer::{join_skills, split_skills, HoursEntry, Volunteer, VolunteerId};
pub use repo::volunteer_repo::{SqliteVolunteerStore, StoreError, StoreResult, VolunteerStore};
pub use report::{hours_report, hours_totals, summary_report, HoursTotal};
pub use service::volunteer_service::{
    LogHoursRequest, RegisterVolunteerRequest, UpdateVolunteerRequest, VolunteerService,
    VolunteerServiceError,
};
pub use validate::{
    is_valid_email, parse_hours, require_non_empty, ValidationError, ValidationResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
