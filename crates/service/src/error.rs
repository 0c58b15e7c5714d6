use thiserror::Error;

/// The only two failures a resource operation reports.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        ServiceError::NotFound(format!("{kind} {id} not found"))
    }

    pub fn malformed_id(id: &str) -> Self {
        ServiceError::BadRequest(format!("{id} is not a valid UUID v4"))
    }
}
