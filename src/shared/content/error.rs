//! The one error taxonomy every content module shares: a request is either
//! invalid (400), aimed at a record that does not exist (404), or hit the
//! database in a way the caller cannot fix (500).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("record not found")]
    NotFound,

    #[error("repository error: {0}")]
    Repository(String),
}

impl ContentError {
    pub fn required(field: &str) -> Self {
        ContentError::Validation(format!("{} is required", field))
    }

    pub fn required_when(field: &str, condition: &str) -> Self {
        ContentError::Validation(format!("{} is required when {}", field, condition))
    }
}

impl From<RepoError> for ContentError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => ContentError::NotFound,
            RepoError::Database(detail) => ContentError::Repository(detail),
        }
    }
}
