//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voltrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use voltrack_core::db::open_store_in_memory;
use voltrack_core::{hours_report, summary_report};

fn main() {
    println!("voltrack_core version={}", voltrack_core::core_version());

    let conn = match open_store_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("store probe failed: {err}");
            std::process::exit(1);
        }
    };

    match hours_report(&conn) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("report probe failed: {err}");
            std::process::exit(1);
        }
    }

    match summary_report(&conn) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("report probe failed: {err}");
            std::process::exit(1);
        }
    }
}
