//! Volunteer store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `volunteers` table and append-only
//!   access to `volunteer_hours`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `add_volunteer` maps the primary-key constraint to
//!   [`StoreError::DuplicateId`].
//! - `update_volunteer`/`remove_volunteer` are silent no-ops for absent
//!   ids; callers pre-check existence via [`VolunteerStore::get_volunteer`].
//! - `add_hours` does not verify the volunteer exists under the default
//!   integrity mode; the caller flows check first.

use crate::db::DbError;
use crate::model::volunteer::{join_skills, split_skills, HoursEntry, Volunteer, VolunteerId};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const VOLUNTEER_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    contact_info,
    skills
FROM volunteers";

const REQUIRED_TABLES: &[(&str, &[&str])] = &[
    ("volunteers", &["id", "name", "email", "contact_info", "skills"]),
    (
        "volunteer_hours",
        &["volunteer_id", "date", "hours_worked", "description"],
    ),
];

pub type StoreResult<T> = Result<T, StoreError>;

/// Record-store error for volunteer persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Insert hit the `volunteers.id` primary key.
    DuplicateId(VolunteerId),
    /// The operation violated the hours foreign key. Only reachable when
    /// the connection was opened with `IntegrityMode::Strict`.
    ForeignKeyViolation { volunteer_id: VolunteerId },
    /// Connection does not carry the expected store schema.
    MissingRequiredTable(&'static str),
    /// Required column is missing from an expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "volunteer id already exists: {id}"),
            Self::ForeignKeyViolation { volunteer_id } => write!(
                f,
                "operation violates hour-record reference for volunteer: {volunteer_id}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "store table is missing: {table}")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "store column is missing: {table}.{column}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record-store interface for volunteer CRUD and hour logging.
pub trait VolunteerStore {
    /// Inserts a new volunteer row; duplicate ids fail.
    fn add_volunteer(&self, volunteer: &Volunteer) -> StoreResult<()>;
    /// Replaces all four mutable fields of the matching row; silent no-op
    /// when the id is absent.
    fn update_volunteer(&self, volunteer: &Volunteer) -> StoreResult<()>;
    /// Deletes the matching row; silent no-op when absent. Never touches
    /// hour rows, which stay behind as orphans in the default mode.
    fn remove_volunteer(&self, id: &str) -> StoreResult<()>;
    /// Gets one volunteer by id.
    fn get_volunteer(&self, id: &str) -> StoreResult<Option<Volunteer>>;
    /// Lists all volunteers in storage iteration order.
    fn list_volunteers(&self) -> StoreResult<Vec<Volunteer>>;
    /// Appends one hours entry for the given volunteer id.
    fn add_hours(&self, volunteer_id: &str, entry: &HoursEntry) -> StoreResult<()>;
    /// Reads back logged entries for one id, in storage order. Works for
    /// orphaned ids too.
    fn hours_for(&self, volunteer_id: &str) -> StoreResult<Vec<HoursEntry>>;
}

/// SQLite-backed volunteer store over an injected connection.
pub struct SqliteVolunteerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVolunteerStore<'conn> {
    /// Constructs a store from a bootstrapped connection.
    ///
    /// # Errors
    /// - Rejects connections missing either store table or any of their
    ///   required columns, instead of failing later mid-statement.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl VolunteerStore for SqliteVolunteerStore<'_> {
    fn add_volunteer(&self, volunteer: &Volunteer) -> StoreResult<()> {
        let inserted = self.conn.execute(
            "INSERT INTO volunteers (id, name, email, contact_info, skills)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                volunteer.id.as_str(),
                volunteer.name.as_str(),
                volunteer.email.as_str(),
                volunteer.contact_info.as_str(),
                join_skills(&volunteer.skills),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateId(volunteer.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update_volunteer(&self, volunteer: &Volunteer) -> StoreResult<()> {
        // Zero affected rows is a success: the legacy contract leaves
        // existence checking to the caller flows.
        self.conn.execute(
            "UPDATE volunteers
             SET
                name = ?1,
                email = ?2,
                contact_info = ?3,
                skills = ?4
             WHERE id = ?5;",
            params![
                volunteer.name.as_str(),
                volunteer.email.as_str(),
                volunteer.contact_info.as_str(),
                join_skills(&volunteer.skills),
                volunteer.id.as_str(),
            ],
        )?;

        Ok(())
    }

    fn remove_volunteer(&self, id: &str) -> StoreResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM volunteers WHERE id = ?1;", [id]);

        match removed {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::ForeignKeyViolation {
                    volunteer_id: id.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_volunteer(&self, id: &str) -> StoreResult<Option<Volunteer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VOLUNTEER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_volunteer_row(row)?));
        }

        Ok(None)
    }

    fn list_volunteers(&self) -> StoreResult<Vec<Volunteer>> {
        let mut stmt = self.conn.prepare(&format!("{VOLUNTEER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut volunteers = Vec::new();

        while let Some(row) = rows.next()? {
            volunteers.push(parse_volunteer_row(row)?);
        }

        Ok(volunteers)
    }

    fn add_hours(&self, volunteer_id: &str, entry: &HoursEntry) -> StoreResult<()> {
        let inserted = self.conn.execute(
            "INSERT INTO volunteer_hours (volunteer_id, date, hours_worked, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                volunteer_id,
                entry.date.as_str(),
                entry.hours_worked,
                entry.description.as_str(),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::ForeignKeyViolation {
                    volunteer_id: volunteer_id.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn hours_for(&self, volunteer_id: &str) -> StoreResult<Vec<HoursEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                date,
                hours_worked,
                description
             FROM volunteer_hours
             WHERE volunteer_id = ?1;",
        )?;

        let mut rows = stmt.query([volunteer_id])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_hours_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_volunteer_row(row: &Row<'_>) -> StoreResult<Volunteer> {
    let skills_text: String = row.get("skills")?;

    Ok(Volunteer {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        contact_info: row.get("contact_info")?,
        skills: split_skills(&skills_text),
    })
}

fn parse_hours_row(row: &Row<'_>) -> StoreResult<HoursEntry> {
    Ok(HoursEntry {
        date: row.get("date")?,
        hours_worked: row.get("hours_worked")?,
        description: row.get("description")?,
    })
}

fn ensure_store_connection_ready(conn: &Connection) -> StoreResult<()> {
    for &(table, columns) in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(StoreError::MissingRequiredTable(table));
        }

        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(StoreError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
