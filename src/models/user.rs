use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub company_logo: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<i32>,
    pub years_experience: Option<i32>,
    pub verified: bool,
}

/// Employer-oriented fields (`company_*`) and worker-oriented fields (`bio`,
/// `skills`, `hourly_rate`) are not enforced exclusive per role at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Employer,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "worker" => Some(Role::Worker),
            "employer" => Some(Role::Employer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Employer => "employer",
        }
    }
}
