//! Creation validators: untyped JSON in, normalized payload out.
//!
//! Each validator checks every field and reports all failures at once, so a
//! client can fix everything in one round trip. Server-assigned fields (`id`,
//! `verified`, `status`, `createdAt`) are ignored when present in the input,
//! never merged into the result.

use serde_json::{Map, Value as JsonValue};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::application_dto::NewApplication;
use crate::dto::job_dto::NewJob;
use crate::dto::user_dto::NewUser;
use crate::models::user::Role;
use crate::utils::time;

pub fn validate_new_user(input: &JsonValue) -> Result<NewUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(obj) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let username = require_string(obj, "username", &mut errors);
    let password = require_string(obj, "password", &mut errors);
    let role = require_role(obj, "role", &mut errors);
    let full_name = require_string(obj, "fullName", &mut errors);
    let email = require_string(obj, "email", &mut errors);
    let phone = optional_string(obj, "phone", &mut errors);
    let company_name = optional_string(obj, "companyName", &mut errors);
    let company_description = optional_string(obj, "companyDescription", &mut errors);
    let company_logo = optional_string(obj, "companyLogo", &mut errors);
    let bio = optional_string(obj, "bio", &mut errors);
    let skills = string_list(obj, "skills", &mut errors);
    let hourly_rate = optional_int(obj, "hourlyRate", &mut errors);
    let years_experience = optional_int(obj, "yearsExperience", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let payload = NewUser {
        username,
        password,
        role,
        full_name,
        email,
        phone,
        company_name,
        company_description,
        company_logo,
        bio,
        skills,
        hourly_rate,
        years_experience,
    };
    payload.validate()?;
    Ok(payload)
}

pub fn validate_new_job(input: &JsonValue) -> Result<NewJob, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(obj) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let title = require_string(obj, "title", &mut errors);
    let description = require_string(obj, "description", &mut errors);
    let location = require_string(obj, "location", &mut errors);
    let requirements = string_list(obj, "requirements", &mut errors);
    let start_date = require_datetime(obj, "startDate", &mut errors);
    let end_date = require_datetime(obj, "endDate", &mut errors);
    let shift_start_time = require_string(obj, "shiftStartTime", &mut errors);
    let shift_end_time = require_string(obj, "shiftEndTime", &mut errors);
    let shift_hours = require_int(obj, "shiftHours", &mut errors);
    let rate = require_int(obj, "rate", &mut errors);
    let employer_id = require_id(obj, "employerId", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let payload = NewJob {
        title,
        description,
        location,
        requirements,
        start_date,
        end_date,
        shift_start_time,
        shift_end_time,
        shift_hours,
        rate,
        employer_id,
    };
    payload.validate()?;
    Ok(payload)
}

pub fn validate_new_application(input: &JsonValue) -> Result<NewApplication, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(obj) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let job_id = require_id(obj, "jobId", &mut errors);
    let worker_id = require_id(obj, "workerId", &mut errors);
    let note = optional_string(obj, "note", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let payload = NewApplication {
        job_id,
        worker_id,
        note,
    };
    payload.validate()?;
    Ok(payload)
}

fn add(errors: &mut ValidationErrors, field: &'static str, code: &'static str, message: &str) {
    let mut error = ValidationError::new(code);
    error.message = Some(message.to_string().into());
    errors.add(field, error);
}

fn as_object<'a>(
    input: &'a JsonValue,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, JsonValue>> {
    let obj = input.as_object();
    if obj.is_none() {
        add(errors, "input", "invalid_type", "expected a JSON object");
    }
    obj
}

// The require_* helpers record an error and return a placeholder; callers
// bail out on any recorded error before the placeholder can be observed.

fn require_string(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> String {
    match obj.get(field) {
        Some(JsonValue::String(s)) => s.clone(),
        None | Some(JsonValue::Null) => {
            add(errors, field, "required", "missing required field");
            String::new()
        }
        Some(_) => {
            add(errors, field, "invalid_type", "expected a string");
            String::new()
        }
    }
}

fn optional_string(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match obj.get(field) {
        Some(JsonValue::String(s)) => Some(s.clone()),
        None | Some(JsonValue::Null) => None,
        Some(_) => {
            add(errors, field, "invalid_type", "expected a string");
            None
        }
    }
}

fn require_int(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> i32 {
    match obj.get(field) {
        Some(value) if !value.is_null() => match value.as_i64().and_then(|n| i32::try_from(n).ok())
        {
            Some(n) => n,
            None => {
                add(errors, field, "invalid_type", "expected an integer");
                0
            }
        },
        _ => {
            add(errors, field, "required", "missing required field");
            0
        }
    }
}

fn optional_int(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<i32> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => None,
        Some(value) => match value.as_i64().and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                add(errors, field, "invalid_type", "expected an integer");
                None
            }
        },
    }
}

fn require_id(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> i64 {
    match obj.get(field) {
        Some(value) if !value.is_null() => match value.as_i64() {
            Some(n) => n,
            None => {
                add(errors, field, "invalid_type", "expected an integer id");
                0
            }
        },
        _ => {
            add(errors, field, "required", "missing required field");
            0
        }
    }
}

fn require_role(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Role {
    match obj.get(field) {
        Some(JsonValue::String(s)) => match Role::parse(s) {
            Some(role) => role,
            None => {
                add(
                    errors,
                    field,
                    "invalid_value",
                    "expected \"worker\" or \"employer\"",
                );
                Role::Worker
            }
        },
        None | Some(JsonValue::Null) => {
            add(errors, field, "required", "missing required field");
            Role::Worker
        }
        Some(_) => {
            add(errors, field, "invalid_type", "expected a string");
            Role::Worker
        }
    }
}

fn require_datetime(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> chrono::DateTime<chrono::Utc> {
    match obj.get(field) {
        Some(JsonValue::String(s)) => match time::parse_datetime(s) {
            Ok(dt) => dt,
            Err(_) => {
                add(
                    errors,
                    field,
                    "invalid_value",
                    "expected an RFC 3339 date-time or YYYY-MM-DD date",
                );
                Default::default()
            }
        },
        None | Some(JsonValue::Null) => {
            add(errors, field, "required", "missing required field");
            Default::default()
        }
        Some(_) => {
            add(errors, field, "invalid_type", "expected a date string");
            Default::default()
        }
    }
}

/// Absent or null collapses to an empty list rather than staying unset.
fn string_list(
    obj: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Vec<String> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    JsonValue::String(s) => out.push(s.clone()),
                    _ => {
                        add(errors, field, "invalid_type", "expected a list of strings");
                        return Vec::new();
                    }
                }
            }
            out
        }
        Some(_) => {
            add(errors, field, "invalid_type", "expected a list of strings");
            Vec::new()
        }
    }
}
