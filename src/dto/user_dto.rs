use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Role, User};

/// The creatable subset of [`User`]: everything a client may supply at
/// registration. `id` and `verified` are server-assigned and have no field
/// here at all.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub company_logo: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub hourly_rate: Option<i32>,
    pub years_experience: Option<i32>,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            role: self.role,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            company_name: self.company_name,
            company_description: self.company_description,
            company_logo: self.company_logo,
            bio: self.bio,
            skills: self.skills,
            hourly_rate: self.hourly_rate,
            years_experience: self.years_experience,
            verified: false,
        }
    }
}
