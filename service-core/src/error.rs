use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure taxonomy for the catalog services.
///
/// The HTTP surface never exposes a failure cause: `IntoResponse` emits the
/// mapped status code with an empty body and leaves the cause in the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(anyhow::Error),

    #[error("malformed payload: {0}")]
    MalformedPayload(anyhow::Error),

    #[error("database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Malformed payloads map to 500 rather than a 4xx: this wire
            // contract does not distinguish client from server errors.
            AppError::MalformedPayload(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            AppError::NotFound(cause) => tracing::debug!(%cause, "request target absent"),
            _ => tracing::error!(error = %self, "request failed"),
        }

        status.into_response()
    }
}
