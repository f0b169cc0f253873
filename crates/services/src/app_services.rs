use std::sync::Arc;

use storage::repository::Storage;

use crate::category_service::CategoryService;
use crate::error::AppServicesError;
use crate::question_service::QuestionService;
use crate::quiz_service::QuizService;
use crate::RandomSource;

/// Assembles the services the HTTP layer talks to.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<QuestionService>,
    categories: Arc<CategoryService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services over an existing storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidPageSize` if `page_size` is zero.
    pub fn from_storage(
        storage: &Storage,
        page_size: usize,
        random: RandomSource,
    ) -> Result<Self, AppServicesError> {
        if page_size == 0 {
            return Err(AppServicesError::InvalidPageSize);
        }

        let questions = Arc::new(
            QuestionService::new(
                Arc::clone(&storage.questions),
                Arc::clone(&storage.categories),
            )
            .with_page_size(page_size),
        );
        let categories = Arc::new(CategoryService::new(Arc::clone(&storage.categories)));
        let quiz = Arc::new(QuizService::new(
            Arc::clone(&storage.questions),
            Arc::clone(&storage.categories),
            random,
        ));

        Ok(Self {
            questions,
            categories,
            quiz,
        })
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn categories(&self) -> Arc<CategoryService> {
        Arc::clone(&self.categories)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
