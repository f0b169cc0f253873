use std::sync::Arc;

use services::{AppServices, CategoryService, QuestionService, QuizService};

/// Shared handler state.
#[derive(Clone)]
pub struct ApiState {
    pub questions: Arc<QuestionService>,
    pub categories: Arc<CategoryService>,
    pub quiz: Arc<QuizService>,
}

impl From<&AppServices> for ApiState {
    fn from(services: &AppServices) -> Self {
        Self {
            questions: services.questions(),
            categories: services.categories(),
            quiz: services.quiz(),
        }
    }
}
