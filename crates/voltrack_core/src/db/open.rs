//! Connection bootstrap utilities for the volunteer store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure referential-integrity behavior per [`IntegrityMode`].
//! - Ensure the schema exists before returning a usable connection.
//!
//! # Invariants
//! - Returned connections always have both store tables present.
//! - `IntegrityMode::Permissive` connections run with foreign keys OFF,
//!   reproducing the legacy desktop app: hour rows are orphaned, not
//!   blocked, when their volunteer is removed.

use super::schema::ensure_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Referential-integrity behavior for the `volunteer_hours` foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrityMode {
    /// Legacy-compatible: the foreign key is declared but not enforced.
    /// Removing a volunteer leaves its hour rows behind as orphans.
    #[default]
    Permissive,
    /// Opt-in enforcement: `PRAGMA foreign_keys = ON`. Logging hours for a
    /// missing volunteer and removing a still-referenced volunteer both
    /// fail at the constraint.
    Strict,
}

impl IntegrityMode {
    fn as_label(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }

    fn pragma_sql(self) -> &'static str {
        match self {
            Self::Permissive => "PRAGMA foreign_keys = OFF;",
            Self::Strict => "PRAGMA foreign_keys = ON;",
        }
    }
}

/// Opens (or creates) the store file at `path` with legacy-compatible
/// integrity behavior.
///
/// # Side effects
/// - Creates the database file and schema on first run.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_store_with_mode(path, IntegrityMode::default())
}

/// Opens (or creates) the store file at `path` with the given mode.
pub fn open_store_with_mode(path: impl AsRef<Path>, mode: IntegrityMode) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start mode=file integrity={}",
        mode.as_label()
    );

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=file duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap_connection(conn, mode, "file", started_at)
}

/// Opens an in-memory store with legacy-compatible integrity behavior.
///
/// Used by tests and smoke probes; contents vanish when the connection is
/// dropped.
pub fn open_store_in_memory() -> DbResult<Connection> {
    open_store_in_memory_with_mode(IntegrityMode::default())
}

/// Opens an in-memory store with the given mode.
pub fn open_store_in_memory_with_mode(mode: IntegrityMode) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=store_open module=db status=start mode=memory integrity={}",
        mode.as_label()
    );

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=memory duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    bootstrap_connection(conn, mode, "memory", started_at)
}

fn bootstrap_connection(
    conn: Connection,
    mode: IntegrityMode,
    storage: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    match configure_connection(&conn, mode) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok mode={} integrity={} duration_ms={}",
                storage,
                mode.as_label(),
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={} duration_ms={} error_code=store_bootstrap_failed error={}",
                storage,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn configure_connection(conn: &Connection, mode: IntegrityMode) -> DbResult<()> {
    conn.execute_batch(mode.pragma_sql())?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn)?;
    Ok(())
}
