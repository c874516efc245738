use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::{Job, JobStatus};

/// The creatable subset of [`Job`]. `status` always starts `Open` regardless
/// of input; `start_date`/`end_date` arrive already coerced by the validator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub shift_start_time: String,
    #[validate(length(min = 1))]
    pub shift_end_time: String,
    pub shift_hours: i32,
    pub rate: i32,
    pub employer_id: i64,
}

impl NewJob {
    pub fn into_job(self, id: i64) -> Job {
        Job {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            requirements: self.requirements,
            start_date: self.start_date,
            end_date: self.end_date,
            shift_start_time: self.shift_start_time,
            shift_end_time: self.shift_end_time,
            shift_hours: self.shift_hours,
            rate: self.rate,
            employer_id: self.employer_id,
            status: JobStatus::Open,
        }
    }
}
