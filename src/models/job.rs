use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub requirements: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub shift_start_time: String,
    pub shift_end_time: String,
    pub shift_hours: i32,
    pub rate: i32,
    pub employer_id: i64,
    pub status: JobStatus,
}

/// Transitions after creation are driven by the business-logic layer; this
/// crate only supplies the `Open` default on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Filled,
    Closed,
}
