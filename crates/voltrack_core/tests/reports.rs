use voltrack_core::db::open_store_in_memory;
use voltrack_core::{
    hours_report, hours_totals, summary_report, HoursEntry, HoursTotal, SqliteVolunteerStore,
    Volunteer, VolunteerStore,
};

#[test]
fn totals_sum_logged_hours_per_volunteer() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteVolunteerStore::try_new(&conn).unwrap();

    store.add_volunteer(&volunteer("v1", "Alice")).unwrap();
    store.add_volunteer(&volunteer("v2", "Bob")).unwrap();
    store
        .add_hours("v1", &HoursEntry::new("2024-03-01", 2.0, "food drive"))
        .unwrap();
    store
        .add_hours("v1", &HoursEntry::new("2024-03-02", 1.5, "cleanup"))
        .unwrap();

    let totals = hours_totals(&conn).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(total_for(&totals, "Alice"), Some(3.5));
    assert_eq!(total_for(&totals, "Bob"), None);
}

#[test]
fn hours_report_renders_totals_and_zero_lines() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteVolunteerStore::try_new(&conn).unwrap();

    store.add_volunteer(&volunteer("v1", "Alice")).unwrap();
    store.add_volunteer(&volunteer("v2", "Bob")).unwrap();
    store
        .add_hours("v1", &HoursEntry::new("2024-03-01", 2.0, "food drive"))
        .unwrap();
    store
        .add_hours("v1", &HoursEntry::new("2024-03-02", 1.5, "cleanup"))
        .unwrap();

    let report = hours_report(&conn).unwrap();
    assert!(report.starts_with("Volunteer Hours Report:\n"));
    assert!(report.contains("Alice: 3.5 hours\n"));
    assert!(report.contains("Bob: 0 hours\n"));
}

#[test]
fn volunteers_sharing_a_name_collapse_into_one_total() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteVolunteerStore::try_new(&conn).unwrap();

    store.add_volunteer(&volunteer("v1", "Sam")).unwrap();
    store.add_volunteer(&volunteer("v2", "Sam")).unwrap();
    store
        .add_hours("v1", &HoursEntry::new("2024-03-01", 1.0, "food drive"))
        .unwrap();
    store
        .add_hours("v2", &HoursEntry::new("2024-03-02", 2.0, "cleanup"))
        .unwrap();

    let totals = hours_totals(&conn).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(total_for(&totals, "Sam"), Some(3.0));
}

#[test]
fn summary_report_lists_each_volunteer_with_raw_skills_text() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteVolunteerStore::try_new(&conn).unwrap();

    store
        .add_volunteer(&Volunteer::new(
            "v1",
            "Alice",
            "a@b.co",
            "555-1234",
            vec!["first aid".to_string(), "driving".to_string()],
        ))
        .unwrap();

    let report = summary_report(&conn).unwrap();
    assert!(report.starts_with("Volunteer Summary Report:\n"));
    assert!(report
        .contains("ID: v1, Name: Alice, Email: a@b.co, Contact: 555-1234, Skills: first aid,driving\n"));
}

#[test]
fn empty_store_renders_header_only_reports() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(hours_report(&conn).unwrap(), "Volunteer Hours Report:\n");
    assert_eq!(summary_report(&conn).unwrap(), "Volunteer Summary Report:\n");
    assert!(hours_totals(&conn).unwrap().is_empty());
}

fn total_for(totals: &[HoursTotal], name: &str) -> Option<f64> {
    totals
        .iter()
        .find(|total| total.name == name)
        .unwrap_or_else(|| panic!("no total row for {name}"))
        .total_hours
}

fn volunteer(id: &str, name: &str) -> Volunteer {
    Volunteer::new(
        id,
        name,
        "volunteer@example.com",
        "555-0000",
        vec!["general".to_string()],
    )
}
