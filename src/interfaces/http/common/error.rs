//! HTTP error mapping
//!
//! Not-found is the only error the API reports by name. Everything else
//! becomes a generic 500 and is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domain::DomainError;

pub const USER_NOT_FOUND: &str = "Usuário não encontrado.";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor.";

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => Self::NotFound,
            DomainError::Storage(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response(),
            Self::Internal(msg) => {
                error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
            }
        }
    }
}
