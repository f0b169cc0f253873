use std::collections::HashSet;

use crate::model::ids::{CategoryId, QuestionId};

/// Quiz state carried by the caller between calls.
///
/// The server keeps nothing between rounds; every request brings the full
/// set of questions already asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRound {
    previous_questions: HashSet<QuestionId>,
    category: Option<CategoryId>,
}

impl QuizRound {
    #[must_use]
    pub fn new(
        previous_questions: impl IntoIterator<Item = QuestionId>,
        category: Option<CategoryId>,
    ) -> Self {
        Self {
            previous_questions: previous_questions.into_iter().collect(),
            category,
        }
    }

    #[must_use]
    pub fn previous_questions(&self) -> &HashSet<QuestionId> {
        &self.previous_questions
    }

    #[must_use]
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    #[must_use]
    pub fn was_asked(&self, id: QuestionId) -> bool {
        self.previous_questions.contains(&id)
    }
}
