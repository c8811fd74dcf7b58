use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render::boundary::CaughtResponse;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// the page itself is rendered by the boundary middleware in `routes`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} {}", .0.status, .0.status_text)]
    Caught(CaughtResponse),

    #[error("Handler panicked: {0}")]
    Panic(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::Caught(CaughtResponse::not_found())
    }

    pub fn unauthorized() -> Self {
        AppError::Caught(CaughtResponse::unauthorized())
    }
}

/// Which boundary should replace the route output. Travels to the boundary
/// middleware as a response extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary {
    Caught(CaughtResponse),
    Error(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, boundary) = match self {
            AppError::Caught(caught) => {
                let status =
                    StatusCode::from_u16(caught.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Boundary::Caught(caught))
            }
            AppError::Panic(msg) => {
                tracing::error!("Handler panicked: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, Boundary::Error(msg))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, Boundary::Error(e.to_string()))
            }
        };

        let mut response = status.into_response();
        response.extensions_mut().insert(boundary);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caught_keeps_its_status() {
        let response = AppError::unauthorized().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.extensions().get::<Boundary>(),
            Some(&Boundary::Caught(CaughtResponse::unauthorized()))
        );
    }

    #[test]
    fn test_internal_error_carries_message() {
        let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.extensions().get::<Boundary>(),
            Some(&Boundary::Error("disk on fire".to_string()))
        );
    }

    #[test]
    fn test_display_of_caught_error() {
        assert_eq!(AppError::not_found().to_string(), "404 Not Found");
    }
}
