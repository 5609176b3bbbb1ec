//! Domain errors

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn user_not_found(id: i32) -> Self {
        Self::NotFound { entity: "User", id }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
