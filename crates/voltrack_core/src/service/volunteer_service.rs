//! Volunteer use-case service.
//!
//! # Responsibility
//! - Package the front end's register/update/remove/log flows, including
//!   the validation each flow runs before touching the store.
//! - Surface not-found and duplicate-id conditions as semantic errors.
//!
//! # Invariants
//! - Update, remove, and log flows pre-check volunteer existence; the
//!   store never has to.
//! - Field checks run in the legacy order: existence, then emptiness,
//!   then email shape or numeric parse.
//! - Successful writes return the record as read back from storage.

use crate::model::volunteer::{split_skills, HoursEntry, Volunteer, VolunteerId};
use crate::repo::volunteer_repo::{StoreError, StoreResult, VolunteerStore};
use crate::validate::{
    is_valid_email, parse_hours, require_non_empty, ValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw form values for registering a new volunteer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVolunteerRequest {
    /// Caller-chosen unique id.
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_info: String,
    /// Comma-separated skills text, as typed in the form.
    pub skills: String,
}

/// Raw form values for a wholesale volunteer update.
///
/// The id is passed separately; every listed field replaces the stored
/// one, nothing merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVolunteerRequest {
    pub name: String,
    pub email: String,
    pub contact_info: String,
    /// Comma-separated skills text, as typed in the form.
    pub skills: String,
}

/// Raw form values for logging an hours entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHoursRequest {
    pub volunteer_id: String,
    /// `YYYY-MM-DD` by convention; not calendar-checked.
    pub date: String,
    /// Hours text, parsed to a float by the flow.
    pub hours: String,
    pub description: String,
}

/// Service error for volunteer use-case flows.
#[derive(Debug)]
pub enum VolunteerServiceError {
    /// A field failed the pre-store validation layer.
    Validation(ValidationError),
    /// Target volunteer does not exist.
    VolunteerNotFound(VolunteerId),
    /// Registration hit an already-used id.
    DuplicateId(VolunteerId),
    /// Persistence-layer failure.
    Store(StoreError),
    /// Internal mismatch between a write and its read-back.
    InconsistentState(&'static str),
}

impl Display for VolunteerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::VolunteerNotFound(id) => write!(f, "volunteer not found: {id}"),
            Self::DuplicateId(id) => write!(f, "volunteer id already exists: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent volunteer state: {details}")
            }
        }
    }
}

impl Error for VolunteerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for VolunteerServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for VolunteerServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateId(id) => Self::DuplicateId(id),
            other => Self::Store(other),
        }
    }
}

/// Use-case facade over a [`VolunteerStore`] implementation.
pub struct VolunteerService<R: VolunteerStore> {
    store: R,
}

impl<R: VolunteerStore> VolunteerService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Registers a new volunteer from raw form values.
    ///
    /// # Contract
    /// - All five fields must be non-empty and the email must pass the
    ///   shape check.
    /// - Skills text is split on commas into the stored list.
    /// - Returns the record as read back after the insert.
    pub fn register_volunteer(
        &self,
        request: &RegisterVolunteerRequest,
    ) -> Result<Volunteer, VolunteerServiceError> {
        require_non_empty(&[
            ("id", request.id.as_str()),
            ("name", request.name.as_str()),
            ("email", request.email.as_str()),
            ("contact_info", request.contact_info.as_str()),
            ("skills", request.skills.as_str()),
        ])?;
        self.check_email(request.email.as_str())?;

        let volunteer = volunteer_from_fields(
            request.id.as_str(),
            request.name.as_str(),
            request.email.as_str(),
            request.contact_info.as_str(),
            request.skills.as_str(),
        );
        self.store.add_volunteer(&volunteer)?;

        self.store.get_volunteer(&volunteer.id)?.ok_or(
            VolunteerServiceError::InconsistentState(
                "registered volunteer not found in read-back",
            ),
        )
    }

    /// Replaces all mutable fields of an existing volunteer.
    ///
    /// # Contract
    /// - Fails with [`VolunteerServiceError::VolunteerNotFound`] when the
    ///   id is absent (the store-level update would silently no-op).
    /// - Returns the record as read back after the update.
    pub fn update_volunteer(
        &self,
        id: &str,
        request: &UpdateVolunteerRequest,
    ) -> Result<Volunteer, VolunteerServiceError> {
        self.require_existing(id)?;

        require_non_empty(&[
            ("name", request.name.as_str()),
            ("email", request.email.as_str()),
            ("contact_info", request.contact_info.as_str()),
            ("skills", request.skills.as_str()),
        ])?;
        self.check_email(request.email.as_str())?;

        let volunteer = volunteer_from_fields(
            id,
            request.name.as_str(),
            request.email.as_str(),
            request.contact_info.as_str(),
            request.skills.as_str(),
        );
        self.store.update_volunteer(&volunteer)?;

        self.store
            .get_volunteer(id)?
            .ok_or(VolunteerServiceError::InconsistentState(
                "updated volunteer not found in read-back",
            ))
    }

    /// Removes an existing volunteer.
    ///
    /// Previously logged hours are not cascade-deleted; in the default
    /// integrity mode they remain in the hours table as orphans.
    pub fn remove_volunteer(&self, id: &str) -> Result<(), VolunteerServiceError> {
        self.require_existing(id)?;
        self.store.remove_volunteer(id)?;
        Ok(())
    }

    /// Logs an hours entry for an existing volunteer.
    ///
    /// # Contract
    /// - Existence is checked before any field validation, matching the
    ///   legacy flow order.
    /// - Hours text must parse as a number; zero and negative values are
    ///   accepted.
    pub fn log_hours(
        &self,
        request: &LogHoursRequest,
    ) -> Result<HoursEntry, VolunteerServiceError> {
        self.require_existing(request.volunteer_id.as_str())?;

        require_non_empty(&[
            ("date", request.date.as_str()),
            ("hours", request.hours.as_str()),
            ("description", request.description.as_str()),
        ])?;
        let hours_worked = parse_hours(request.hours.as_str())?;

        let entry = HoursEntry::new(
            request.date.clone(),
            hours_worked,
            request.description.clone(),
        );
        self.store
            .add_hours(request.volunteer_id.as_str(), &entry)?;

        Ok(entry)
    }

    /// Gets one volunteer by id.
    pub fn volunteer(&self, id: &str) -> StoreResult<Option<Volunteer>> {
        self.store.get_volunteer(id)
    }

    /// Lists all volunteers in storage iteration order.
    pub fn volunteers(&self) -> StoreResult<Vec<Volunteer>> {
        self.store.list_volunteers()
    }

    /// Reads back logged entries for one volunteer id.
    pub fn hours_for(&self, volunteer_id: &str) -> StoreResult<Vec<HoursEntry>> {
        self.store.hours_for(volunteer_id)
    }

    fn require_existing(&self, id: &str) -> Result<(), VolunteerServiceError> {
        if self.store.get_volunteer(id)?.is_none() {
            return Err(VolunteerServiceError::VolunteerNotFound(id.to_string()));
        }
        Ok(())
    }

    fn check_email(&self, email: &str) -> Result<(), VolunteerServiceError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail {
                value: email.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn volunteer_from_fields(
    id: &str,
    name: &str,
    email: &str,
    contact_info: &str,
    skills_text: &str,
) -> Volunteer {
    Volunteer::new(id, name, email, contact_info, split_skills(skills_text))
}
