//! In-memory reference store.
//!
//! Implements the storage contract the production database is expected to
//! honor: server-assigned ids, `username` uniqueness, foreign-key existence
//! checks, and read-time joins. Inserts take the normalized payloads produced
//! by [`crate::validation`] and apply the constructor-time defaults
//! (`verified = false`, `status = open`/`pending`, `created_at = now`).

use std::collections::BTreeMap;

use crate::dto::application_dto::NewApplication;
use crate::dto::job_dto::NewJob;
use crate::dto::user_dto::NewUser;
use crate::error::{Error, Result};
use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::User;
use crate::utils::time;

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: BTreeMap<i64, User>,
    jobs: BTreeMap<i64, Job>,
    applications: BTreeMap<i64, Application>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, new: NewUser) -> Result<User> {
        if self.users.values().any(|u| u.username == new.username) {
            return Err(Error::UsernameTaken(new.username));
        }
        let id = next_id(&self.users);
        let user = new.into_user(id);
        self.users.insert(id, user.clone());
        tracing::debug!(id, username = %user.username, "inserted user");
        Ok(user)
    }

    pub fn insert_job(&mut self, new: NewJob) -> Result<Job> {
        if !self.users.contains_key(&new.employer_id) {
            return Err(Error::DanglingReference {
                field: "employerId",
                entity: "user",
                id: new.employer_id,
            });
        }
        // TODO: decide whether start_date > end_date should be rejected here;
        // accepted as-is until product settles the question.
        let id = next_id(&self.jobs);
        let job = new.into_job(id);
        self.jobs.insert(id, job.clone());
        tracing::debug!(id, employer_id = job.employer_id, "inserted job");
        Ok(job)
    }

    pub fn insert_application(&mut self, new: NewApplication) -> Result<Application> {
        if !self.jobs.contains_key(&new.job_id) {
            return Err(Error::DanglingReference {
                field: "jobId",
                entity: "job",
                id: new.job_id,
            });
        }
        if !self.users.contains_key(&new.worker_id) {
            return Err(Error::DanglingReference {
                field: "workerId",
                entity: "user",
                id: new.worker_id,
            });
        }
        // TODO: duplicate (job_id, worker_id) applications stay permitted
        // until product decides otherwise.
        let id = next_id(&self.applications);
        let application = new.into_application(id, time::now());
        self.applications.insert(id, application.clone());
        tracing::debug!(id, job_id = application.job_id, "inserted application");
        Ok(application)
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn job(&self, id: i64) -> Option<&Job> {
        self.jobs.get(&id)
    }

    pub fn application(&self, id: i64) -> Option<&Application> {
        self.applications.get(&id)
    }

    pub fn employer_of(&self, job: &Job) -> Result<&User> {
        self.users.get(&job.employer_id).ok_or_else(|| {
            Error::NotFound(format!("employer {} of job {}", job.employer_id, job.id))
        })
    }

    pub fn job_of(&self, application: &Application) -> Result<&Job> {
        self.jobs.get(&application.job_id).ok_or_else(|| {
            Error::NotFound(format!(
                "job {} of application {}",
                application.job_id, application.id
            ))
        })
    }

    pub fn worker_of(&self, application: &Application) -> Result<&User> {
        self.users.get(&application.worker_id).ok_or_else(|| {
            Error::NotFound(format!(
                "worker {} of application {}",
                application.worker_id, application.id
            ))
        })
    }
}

fn next_id<T>(table: &BTreeMap<i64, T>) -> i64 {
    table.keys().next_back().map_or(1, |last| last + 1)
}
