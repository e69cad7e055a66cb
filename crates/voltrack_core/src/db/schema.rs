//! Two-table schema owned by the record store.
//!
//! # Responsibility
//! - Define the `volunteers` and `volunteer_hours` tables.
//! - Apply the schema idempotently on every open.
//!
//! # Invariants
//! - `volunteers.id` is the primary key; duplicate inserts must fail at
//!   the constraint.
//! - `volunteer_hours.volunteer_id` is declared as a foreign key but only
//!   enforced when the connection runs with `PRAGMA foreign_keys = ON`.

use super::DbResult;
use rusqlite::Connection;

// Skills are stored as one comma-joined TEXT column; the codec lives in
// `model::volunteer`.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS volunteers (
    id TEXT PRIMARY KEY,
    name TEXT,
    email TEXT,
    contact_info TEXT,
    skills TEXT
);

CREATE TABLE IF NOT EXISTS volunteer_hours (
    volunteer_id TEXT,
    date TEXT,
    hours_worked REAL,
    description TEXT,
    FOREIGN KEY (volunteer_id) REFERENCES volunteers(id)
);
";

/// Creates both tables when absent. Safe to run on every open.
pub(crate) fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
