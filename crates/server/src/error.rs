//! Unified error handling for the contacts API.
//!
//! Every failure surfaces to the client as a JSON [`ErrorResponse`] with a
//! numeric code and a localized message. The message catalog is fixed:
//! nothing beyond the three strings below ever leaks out.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Message for a missing person record.
pub const PERSON_NOT_FOUND_MESSAGE: &str = "Person Entity가 존재하지 않습니다.";

/// Message for a full update that tries to change the name.
pub const RENAME_NOT_PERMITTED_MESSAGE: &str = "이름을 변경 하지 않습니다.";

/// Catch-all message for server-side failures.
pub const UNKNOWN_SERVER_ERROR_MESSAGE: &str = "알 수 없는 서버 오류가 발생하였습니다.";

/// Application-level error type for the contacts API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// No person exists with the requested ID.
    #[error("person not found")]
    PersonNotFound,

    /// Full update addressed a person that does not exist.
    ///
    /// Answered with 400 rather than 404; the full-update surface has
    /// always reported a missing target as a bad request.
    #[error("full update target does not exist")]
    UpdateTargetMissing,

    /// Full update attempted to change the name.
    #[error("name must not change")]
    RenameNotPermitted,

    /// Create was called without a name.
    ///
    /// Surfaced to clients as a generic server error; create-time
    /// validation failures are indistinguishable from any other server
    /// fault on the wire.
    #[error("name is required")]
    NameRequired,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Numeric code, mirroring the HTTP status.
    pub code: u16,
    /// Localized human-readable message.
    pub message: String,
}

impl ErrorResponse {
    fn of(status: StatusCode, message: &str) -> Self {
        Self {
            code: status.as_u16(),
            message: message.to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Repository(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Contacts request error"
            );
        }

        let status = match &self {
            Self::Repository(_) | Self::NameRequired => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PersonNotFound => StatusCode::NOT_FOUND,
            Self::UpdateTargetMissing | Self::RenameNotPermitted => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::Repository(_) | Self::NameRequired => UNKNOWN_SERVER_ERROR_MESSAGE,
            Self::PersonNotFound | Self::UpdateTargetMissing => PERSON_NOT_FOUND_MESSAGE,
            Self::RenameNotPermitted => RENAME_NOT_PERMITTED_MESSAGE,
        };

        (status, Json(ErrorResponse::of(status, message))).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(get_status(AppError::PersonNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::UpdateTargetMissing),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::RenameNotPermitted),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NameRequired),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::NotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::of(StatusCode::BAD_REQUEST, RENAME_NOT_PERMITTED_MESSAGE);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], RENAME_NOT_PERMITTED_MESSAGE);
    }

    #[test]
    fn test_name_required_is_generic_on_the_wire() {
        // Validation on create must be indistinguishable from a server fault.
        let err = AppError::NameRequired;
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(
            get_status(AppError::NameRequired),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
