//! SQLite storage bootstrap for the volunteer record store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for VolTrack core.
//! - Create the `volunteers`/`volunteer_hours` schema when absent.
//!
//! # Invariants
//! - Schema creation is idempotent; reopening an initialized store is not
//!   an error and never touches existing rows.
//! - Core code must not read/write application data before bootstrap
//!   succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::{
    open_store, open_store_in_memory, open_store_in_memory_with_mode, open_store_with_mode,
    IntegrityMode,
};

/// Conventional file name for the backing store; the embedding front end
/// decides which directory it lives in.
pub const DEFAULT_STORE_FILE: &str = "volunteers.db";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
