use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

use crate::repository::RepositoryError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `UNSUPPORTED_MEDIA_TYPE`, `NOT_FOUND`, `CONFLICT`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "A new blog cannot already have an ID")]
    pub message: String,
    /// Entity the error refers to, for request-shape errors on a resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "blog")]
    pub entity_name: Option<&'static str>,
    /// Stable key identifying the request-shape error (`idexists`, `idnull`).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "idexists")]
    pub error_key: Option<&'static str>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request for a specific entity (unexpected or missing id).
    BadRequestAlert {
        message: String,
        entity_name: &'static str,
        error_key: &'static str,
    },
    Validation(String),
    UnsupportedMediaType(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request_alert(
        message: impl Into<String>,
        entity_name: &'static str,
        error_key: &'static str,
    ) -> Self {
        AppError::BadRequestAlert {
            message: message.into(),
            entity_name,
            error_key,
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        let plain = |code: &'static str, message: String| ErrorBody {
            code,
            message,
            entity_name: None,
            error_key: None,
        };

        match self {
            AppError::BadRequestAlert {
                message,
                entity_name,
                error_key,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message,
                    entity_name: Some(entity_name),
                    error_key: Some(error_key),
                },
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, plain("VALIDATION_ERROR", msg))
            }
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                plain("UNSUPPORTED_MEDIA_TYPE", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, plain("NOT_FOUND", msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, plain("CONFLICT", msg)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    plain("INTERNAL_ERROR", "An unexpected error occurred".into()),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Unique constraint violation: {detail}");
                AppError::Conflict("The row conflicts with an existing record".into())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!("Foreign key constraint violation: {detail}");
                AppError::Conflict("The row references a record that does not exist".into())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Db(e) => e.into(),
            other @ RepositoryError::NoSuchRow { .. } => AppError::Internal(other.to_string()),
        }
    }
}
