// HTTP error responses.
//
// Responsibilities
// - Render every failure as `{ "error": <message> }` with the matching status.
// - Map application errors onto statuses; storage failures are logged here and answered with a
//   per endpoint message that never leaks backend detail.

use crate::modules::votes::use_cases::errors::ApplicationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Internal(&'static str),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn from_application(err: ApplicationError, failure: &'static str) -> Self {
        match err {
            ApplicationError::Validation(e) => Self::BadRequest(e.to_string()),
            duplicate @ ApplicationError::Duplicate { .. } => {
                Self::BadRequest(duplicate.to_string())
            }
            ApplicationError::NotFound => Self::NotFound("Vote not found"),
            ApplicationError::Store(e) => {
                error!(error = %e, "{failure}");
                Self::Internal(failure)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
