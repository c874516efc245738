use serde_json::{json, Value as JsonValue};
use shiftwork_core::validation::{validate_new_application, validate_new_job, validate_new_user};

fn worker_input() -> JsonValue {
    json!({
        "username": "alice",
        "password": "x",
        "role": "worker",
        "fullName": "Alice A",
        "email": "a@x.com"
    })
}

fn job_input() -> JsonValue {
    json!({
        "title": "Warehouse shift",
        "description": "Unload pallets and restock shelves",
        "location": "Austin",
        "startDate": "2024-01-01",
        "endDate": "2024-01-02",
        "shiftStartTime": "08:00",
        "shiftEndTime": "16:00",
        "shiftHours": 8,
        "rate": 20,
        "employerId": 1
    })
}

#[test]
fn minimal_user_normalizes_with_empty_skills() {
    let payload = validate_new_user(&worker_input()).expect("valid input");
    assert_eq!(payload.username, "alice");
    assert!(payload.skills.is_empty());

    let serialized = serde_json::to_value(&payload).expect("serialize");
    let obj = serialized.as_object().expect("object");
    assert_eq!(obj["skills"], json!([]));
    assert!(!obj.contains_key("verified"));
    assert!(!obj.contains_key("id"));
}

#[test]
fn server_assigned_user_fields_are_ignored() {
    let mut input = worker_input();
    input["id"] = json!(999);
    input["verified"] = json!(true);

    let payload = validate_new_user(&input).expect("valid input");
    let serialized = serde_json::to_value(&payload).expect("serialize");
    let obj = serialized.as_object().expect("object");
    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("verified"));
}

#[test]
fn user_missing_required_fields_all_reported() {
    let errors = validate_new_user(&json!({ "username": "bob" })).unwrap_err();
    let fields = errors.field_errors();
    for field in ["password", "role", "fullName", "email"] {
        let entry = fields.get(field).unwrap_or_else(|| panic!("{field} missing"));
        assert_eq!(entry[0].code, "required");
    }
    assert!(!fields.contains_key("username"));
    assert!(!fields.contains_key("skills"));
}

#[test]
fn user_type_errors_reported_together() {
    let mut input = worker_input();
    input["hourlyRate"] = json!("twenty");
    input["skills"] = json!("forklift");
    input["phone"] = json!(123);

    let errors = validate_new_user(&input).unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["hourlyRate"][0].code, "invalid_type");
    assert_eq!(fields["skills"][0].code, "invalid_type");
    assert_eq!(fields["phone"][0].code, "invalid_type");
}

#[test]
fn unknown_role_is_rejected() {
    let mut input = worker_input();
    input["role"] = json!("admin");

    let errors = validate_new_user(&input).unwrap_err();
    assert_eq!(errors.field_errors()["role"][0].code, "invalid_value");
}

#[test]
fn empty_username_is_rejected() {
    let mut input = worker_input();
    input["username"] = json!("");

    let errors = validate_new_user(&input).unwrap_err();
    assert!(errors.field_errors().contains_key("username"));
}

#[test]
fn job_defaults_requirements_and_coerces_dates() {
    let payload = validate_new_job(&job_input()).expect("valid input");
    assert!(payload.requirements.is_empty());

    let serialized = serde_json::to_value(&payload).expect("serialize");
    let start = serialized["startDate"].as_str().expect("date string");
    let end = serialized["endDate"].as_str().expect("date string");
    assert!(start.starts_with("2024-01-01"), "got {start}");
    assert!(end.starts_with("2024-01-02"), "got {end}");
    assert_eq!(serialized["requirements"], json!([]));
}

#[test]
fn job_accepts_rfc3339_dates() {
    let mut input = job_input();
    input["startDate"] = json!("2024-01-01T08:00:00Z");

    let payload = validate_new_job(&input).expect("valid input");
    assert_eq!(payload.start_date.to_rfc3339(), "2024-01-01T08:00:00+00:00");
}

#[test]
fn job_rejects_unparseable_dates() {
    let mut input = job_input();
    input["startDate"] = json!("tomorrow");
    input["endDate"] = json!(20240102);

    let errors = validate_new_job(&input).unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields["startDate"][0].code, "invalid_value");
    assert_eq!(fields["endDate"][0].code, "invalid_type");
}

#[test]
fn job_does_not_order_check_dates() {
    let mut input = job_input();
    input["startDate"] = json!("2024-02-01");
    input["endDate"] = json!("2024-01-01");

    // Chronological sanity is left to upstream business logic.
    assert!(validate_new_job(&input).is_ok());
}

#[test]
fn application_missing_job_id_reported_alone() {
    let errors = validate_new_application(&json!({ "workerId": 2 })).unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["jobId"][0].code, "required");
}

#[test]
fn application_ignores_status_and_created_at() {
    let payload = validate_new_application(&json!({
        "jobId": 1,
        "workerId": 2,
        "status": "accepted",
        "createdAt": "1999-01-01T00:00:00Z"
    }))
    .expect("valid input");

    let serialized = serde_json::to_value(&payload).expect("serialize");
    let obj = serialized.as_object().expect("object");
    assert!(!obj.contains_key("status"));
    assert!(!obj.contains_key("createdAt"));
}

#[test]
fn non_object_input_is_a_single_error() {
    let errors = validate_new_user(&json!("alice")).unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["input"][0].code, "invalid_type");
}
