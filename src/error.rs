pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("{field} does not reference an existing {entity} (id {id})")]
    DanglingReference {
        field: &'static str,
        entity: &'static str,
        id: i64,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
