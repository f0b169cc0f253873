#![forbid(unsafe_code)]

pub mod app_services;
pub mod category_service;
pub mod error;
pub mod question_service;
pub mod quiz_service;
pub mod random;

pub use app_services::AppServices;
pub use category_service::CategoryService;
pub use error::{AppServicesError, CategoryServiceError, QuestionServiceError, QuizError};
pub use question_service::{CategoryQuestions, QuestionPage, QuestionService, SearchResults};
pub use quiz_service::{QuizService, candidate_pool};
pub use random::RandomSource;
