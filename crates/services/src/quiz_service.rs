use std::sync::Arc;

use storage::repository::{CategoryRepository, QuestionRepository};
use trivia_core::model::{Question, QuizRound};

use crate::RandomSource;
use crate::error::QuizError;

/// Questions still eligible in this round: not asked yet and, when the round
/// is scoped to a category, filed under it.
#[must_use]
pub fn candidate_pool<'a>(questions: &'a [Question], round: &QuizRound) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| !round.was_asked(q.id()))
        .filter(|q| round.category().is_none_or(|c| q.category() == c))
        .collect()
}

/// Picks the next quiz question. Holds no state between calls.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    random: RandomSource,
}

impl QuizService {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        random: RandomSource,
    ) -> Self {
        Self {
            questions,
            categories,
            random,
        }
    }

    /// Draw one unseen question uniformly at random.
    ///
    /// Returns `Ok(None)` once every eligible question has been asked; that is
    /// the normal end of a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::CategoryNotFound` if the round names a missing category.
    /// Returns `QuizError::Storage` if repository access fails.
    pub async fn next_question(&self, round: &QuizRound) -> Result<Option<Question>, QuizError> {
        let questions = match round.category() {
            Some(category) => {
                if self.categories.get_category(category).await?.is_none() {
                    return Err(QuizError::CategoryNotFound(category));
                }
                self.questions.questions_in_category(category).await?
            }
            None => self.questions.list_questions().await?,
        };

        let pool = candidate_pool(&questions, round);
        let picked = self
            .random
            .choose_index(pool.len())
            .and_then(|idx| pool.get(idx))
            .map(|q| (*q).clone());

        tracing::debug!(
            candidates = pool.len(),
            asked = round.previous_questions().len(),
            picked = ?picked.as_ref().map(Question::id),
            "selected quiz question"
        );
        Ok(picked)
    }
}
