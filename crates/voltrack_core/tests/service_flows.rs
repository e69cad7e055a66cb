use voltrack_core::db::open_store_in_memory;
use voltrack_core::{
    LogHoursRequest, RegisterVolunteerRequest, SqliteVolunteerStore, UpdateVolunteerRequest,
    ValidationError, VolunteerService, VolunteerServiceError, VolunteerStore,
};

#[test]
fn register_stores_and_returns_the_volunteer() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let registered = service.register_volunteer(&register_request("v1")).unwrap();
    assert_eq!(registered.id, "v1");
    assert_eq!(registered.name, "Alice");
    assert_eq!(registered.email, "alice@example.com");
    assert_eq!(
        registered.skills,
        vec!["first aid".to_string(), "driving".to_string()]
    );

    let stored = service.volunteer("v1").unwrap().unwrap();
    assert_eq!(stored, registered);
}

#[test]
fn register_rejects_an_empty_field_by_name() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let mut request = register_request("v1");
    request.email = String::new();

    let err = service.register_volunteer(&request).unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::Validation(ValidationError::EmptyField { field: "email" })
    ));
    assert!(service.volunteer("v1").unwrap().is_none());
}

#[test]
fn register_rejects_a_malformed_email() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let mut request = register_request("v1");
    request.email = "a.b@com".to_string();

    let err = service.register_volunteer(&request).unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::Validation(ValidationError::InvalidEmail { value }) if value == "a.b@com"
    ));
}

#[test]
fn register_surfaces_duplicate_ids() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    service.register_volunteer(&register_request("v1")).unwrap();
    let err = service
        .register_volunteer(&register_request("v1"))
        .unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::DuplicateId(id) if id == "v1"
    ));
}

#[test]
fn update_requires_an_existing_volunteer() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let err = service
        .update_volunteer("missing", &update_request())
        .unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::VolunteerNotFound(id) if id == "missing"
    ));
}

#[test]
fn update_replaces_fields_and_resplits_skills() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    service.register_volunteer(&register_request("v1")).unwrap();
    let updated = service.update_volunteer("v1", &update_request()).unwrap();

    assert_eq!(updated.id, "v1");
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.email, "asmith@example.com");
    assert_eq!(updated.contact_info, "555-0000");
    assert_eq!(
        updated.skills,
        vec!["logistics".to_string(), "cooking".to_string()]
    );

    let stored = service.volunteer("v1").unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn remove_requires_an_existing_volunteer() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let err = service.remove_volunteer("missing").unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::VolunteerNotFound(id) if id == "missing"
    ));
}

#[test]
fn remove_deletes_an_existing_volunteer() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    service.register_volunteer(&register_request("v1")).unwrap();
    service.remove_volunteer("v1").unwrap();

    assert!(service.volunteer("v1").unwrap().is_none());
}

#[test]
fn log_hours_checks_existence_before_field_validation() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    let request = LogHoursRequest {
        volunteer_id: "missing".to_string(),
        date: String::new(),
        hours: String::new(),
        description: String::new(),
    };

    let err = service.log_hours(&request).unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::VolunteerNotFound(id) if id == "missing"
    ));
}

#[test]
fn log_hours_rejects_non_numeric_hours() {
    let conn = open_store_in_memory().unwrap();
    let service = VolunteerService::new(SqliteVolunteerStore::try_new(&conn).unwrap());

    service.register_volunteer(&register_request("v1")).unwrap();

    let request = LogHoursRequest {
        volunteer_id: "v1".to_string(),
        date: "2024-03-01".to_string(),
        hours: "three".to_string(),
        description: "food drive".to_string(),
    };

    let err = service.log_hours(&request).unwrap_err();
    assert!(matches!(
        err,
        VolunteerServiceError::Validation(ValidationError::NotANumber { value }) if value == "three"
    ));
    assert!(service.hours_for("v1").unwrap().is_empty());
}

#[test]
fn log_hours_appends_a_parsed_entry() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteVolunteerStore::try_new(&conn).unwrap();
    let service = VolunteerService::new(store);

    service.register_volunteer(&register_request("v1")).unwrap();

    let request = LogHoursRequest {
        volunteer_id: "v1".to_string(),
        date: "2024-03-01".to_string(),
        hours: " 3.5 ".to_string(),
        description: "food drive".to_string(),
    };

    let entry = service.log_hours(&request).unwrap();
    assert_eq!(entry.date, "2024-03-01");
    assert_eq!(entry.hours_worked, 3.5);
    assert_eq!(entry.description, "food drive");

    let read_store = SqliteVolunteerStore::try_new(&conn).unwrap();
    let entries = read_store.hours_for("v1").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], entry);
}

fn register_request(id: &str) -> RegisterVolunteerRequest {
    RegisterVolunteerRequest {
        id: id.to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        contact_info: "555-1234".to_string(),
        skills: "first aid,driving".to_string(),
    }
}

fn update_request() -> UpdateVolunteerRequest {
    UpdateVolunteerRequest {
        name: "Alice Smith".to_string(),
        email: "asmith@example.com".to_string(),
        contact_info: "555-0000".to_string(),
        skills: "logistics,cooking".to_string(),
    }
}
