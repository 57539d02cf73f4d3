//! Error taxonomy shared by the statement store, the scoring engine and the
//! HTTP handlers.
//!
//! Three kinds only: invalid input (rejected before any store call), not
//! found (no row for the requested company code) and retrieval failure
//! (storage malfunction, including timeouts). The kind is preserved across
//! layer boundaries so the controller can map it to a status code.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request input, reported before touching storage.
    #[error("{0}")]
    InvalidInput(String),

    /// No data exists for the requested company code.
    #[error("{0}")]
    NotFound(String),

    /// The storage layer failed while executing an otherwise valid request.
    #[error("{context}: {source}")]
    Retrieval {
        context: String,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    /// Wrap a database error with the operation and company code it happened in.
    pub fn retrieval(context: impl Into<String>, source: DbErr) -> Self {
        Self::Retrieval {
            context: context.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Retrieval { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::<()>::error(self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Reject blank company codes before any store call is made.
pub fn validate_company_code(code: &str) -> Result<(), AppError> {
    if code.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "company code must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err = AppError::InvalidInput("bad".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("no rows".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_retrieval_maps_to_500_and_keeps_context() {
        let err = AppError::retrieval(
            "fetching statements for code 7203",
            DbErr::Custom("connection reset".into()),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("7203"));
    }

    #[test]
    fn test_blank_code_rejected() {
        assert!(validate_company_code("").is_err());
        assert!(validate_company_code("   ").is_err());
        assert!(validate_company_code("7203").is_ok());
    }
}
