use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application::{Application, ApplicationStatus};

/// The creatable subset of [`Application`]. `status` and `created_at` are
/// server-assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: i64,
    pub worker_id: i64,
    pub note: Option<String>,
}

impl NewApplication {
    pub fn into_application(self, id: i64, created_at: DateTime<Utc>) -> Application {
        Application {
            id,
            job_id: self.job_id,
            worker_id: self.worker_id,
            status: ApplicationStatus::Pending,
            note: self.note,
            created_at,
        }
    }
}
