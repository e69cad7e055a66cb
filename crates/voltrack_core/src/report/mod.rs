//! Aggregate text reports over the volunteer store.
//!
//! # Responsibility
//! - Produce the two human-readable reports the desktop front end shows.
//! - Keep report SQL and line framing in one place.
//!
//! # Invariants
//! - Every volunteer appears in the hours report, including those with no
//!   logged entries (null total, rendered as `0`).
//! - Totals are grouped by volunteer **name**: two volunteers sharing a
//!   name merge into one line. Inherited grouping-key ambiguity, kept for
//!   output parity with existing databases.
//! - Report text is for humans; only the line framing is stable, not the
//!   number formatting.

use crate::db::DbResult;
use rusqlite::Connection;

/// One aggregate row of the hours report.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursTotal {
    /// Grouping key; merges same-named volunteers.
    pub name: String,
    /// Sum of logged hours; `None` when no entries exist for the name.
    pub total_hours: Option<f64>,
}

/// Sums logged hours per volunteer name, keeping zero-entry volunteers.
pub fn hours_totals(conn: &Connection) -> DbResult<Vec<HoursTotal>> {
    let mut stmt = conn.prepare(
        "SELECT v.name AS name, SUM(vh.hours_worked) AS total_hours
         FROM volunteers v
         LEFT JOIN volunteer_hours vh ON v.id = vh.volunteer_id
         GROUP BY v.name;",
    )?;

    let mut rows = stmt.query([])?;
    let mut totals = Vec::new();

    while let Some(row) = rows.next()? {
        totals.push(HoursTotal {
            name: row.get("name")?,
            total_hours: row.get("total_hours")?,
        });
    }

    Ok(totals)
}

/// Renders the per-volunteer total-hours report.
pub fn hours_report(conn: &Connection) -> DbResult<String> {
    Ok(render_hours_report(&hours_totals(conn)?))
}

/// Renders the full volunteer listing, one line per volunteer.
///
/// Skills are emitted as the raw comma-joined storage text, which equals
/// rejoining the decoded list.
pub fn summary_report(conn: &Connection) -> DbResult<String> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, contact_info, skills
         FROM volunteers;",
    )?;

    let mut rows = stmt.query([])?;
    let mut report = String::from("Volunteer Summary Report:\n");

    while let Some(row) = rows.next()? {
        let id: String = row.get("id")?;
        let name: String = row.get("name")?;
        let email: String = row.get("email")?;
        let contact_info: String = row.get("contact_info")?;
        let skills: String = row.get("skills")?;
        report.push_str(&format!(
            "ID: {id}, Name: {name}, Email: {email}, Contact: {contact_info}, Skills: {skills}\n"
        ));
    }

    Ok(report)
}

fn render_hours_report(totals: &[HoursTotal]) -> String {
    let mut report = String::from("Volunteer Hours Report:\n");

    for row in totals {
        let total = row.total_hours.unwrap_or(0.0);
        report.push_str(&format!("{}: {} hours\n", row.name, total));
    }

    report
}
