//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use trivia_core::model::{CategoryId, QuestionError, QuestionId};

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error("page {0} is out of range")]
    PageOutOfRange(u32),
    #[error("category {0} does not exist")]
    CategoryNotFound(CategoryId),
    #[error("question {0} does not exist")]
    QuestionNotFound(QuestionId),
    #[error("cannot file a question under unknown category {0}")]
    UnknownCategory(CategoryId),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CategoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CategoryServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz category {0} does not exist")]
    CategoryNotFound(CategoryId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}
