use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::{CategoryServiceError, QuestionServiceError, QuizError};
use thiserror::Error;
use tracing::{debug, error};

/// Errors a handler can answer with. The display text is the client-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    /// Carries the underlying cause for the log; clients only see the generic message.
    #[error("internal server error")]
    Internal(String),
}

/// `{success: false, error: <status>, message: <text>}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(cause) = &self {
            error!(%cause, "request failed");
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<QuestionServiceError> for ApiError {
    fn from(err: QuestionServiceError) -> Self {
        debug!(error = %err, "question request rejected");
        match err {
            QuestionServiceError::PageOutOfRange(_)
            | QuestionServiceError::CategoryNotFound(_)
            | QuestionServiceError::QuestionNotFound(_) => ApiError::NotFound,
            QuestionServiceError::UnknownCategory(_) | QuestionServiceError::Question(_) => {
                ApiError::Unprocessable
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CategoryServiceError> for ApiError {
    fn from(err: CategoryServiceError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        debug!(error = %err, "quiz request rejected");
        match err {
            QuizError::CategoryNotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{CategoryId, QuestionError};

    #[test]
    fn service_errors_map_to_statuses() {
        let not_found: ApiError = QuestionServiceError::PageOutOfRange(9999).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let missing: ApiError =
            QuestionServiceError::Question(QuestionError::MissingField("difficulty")).into();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let quiz: ApiError = QuizError::CategoryNotFound(CategoryId::new(99)).into();
        assert_eq!(quiz.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn messages_match_envelope_text() {
        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "method not allowed");
        assert_eq!(ApiError::Unprocessable.to_string(), "unprocessable");
        assert_eq!(
            ApiError::Internal("disk full".into()).to_string(),
            "internal server error"
        );
    }
}
