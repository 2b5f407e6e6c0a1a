use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ecosave_core::error::CoreError;
use serde::Serialize;

/// Error returned by route handlers, rendered as `{"error": "..."}`.
///
/// AI failures never reach this type: the workflows substitute fallback
/// values. Only bad input, unknown records and conflicting requests do.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "internal server error".to_owned()
            }
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Conflict(msg) => msg,
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        let message = e.to_string();
        match e {
            CoreError::InvalidInput { .. } => ApiError::BadRequest(message),
            CoreError::AuditNotFound(_) => ApiError::NotFound(message),
            CoreError::InvalidTransition { .. } | CoreError::AnalysisInFlight(_) => {
                ApiError::Conflict(message)
            }
        }
    }
}

/// A request body that is not valid JSON or does not fit the target type
/// (missing field, unknown variant, number out of range).
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// The analysis task panicked or was cancelled.
impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("analysis task failed: {e}"))
    }
}
