use std::sync::Arc;

use storage::repository::{CategoryRepository, NewQuestionRecord, QuestionRepository, StorageError};
use trivia_core::model::{Category, CategoryId, Question, QuestionDraft, QuestionId};
use trivia_core::{QUESTIONS_PER_PAGE, paginate};

use crate::error::QuestionServiceError;

/// One page of the full question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// One page of the questions filed under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Every question matching a search term. Not paginated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Listing, search, creation, and deletion of questions.
///
/// Paged listings treat an empty page as an error; search treats an empty
/// result as a normal answer.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    page_size: usize,
}

impl QuestionService {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
            page_size: QUESTIONS_PER_PAGE,
        }
    }

    /// Override the number of questions per page. Zero is ignored.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page `page` (1-based) of all questions, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::PageOutOfRange` when the page holds no questions.
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn list_questions(&self, page: u32) -> Result<QuestionPage, QuestionServiceError> {
        let all = self.questions.list_questions().await?;
        let questions = paginate(&all, page, self.page_size);
        if questions.is_empty() {
            return Err(QuestionServiceError::PageOutOfRange(page));
        }
        Ok(QuestionPage {
            questions,
            total_questions: all.len(),
        })
    }

    /// Page `page` of the questions in `category_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::CategoryNotFound` if the category does not exist,
    /// checked before any paging.
    /// Returns `QuestionServiceError::PageOutOfRange` when the page holds no questions.
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn questions_in_category(
        &self,
        category_id: CategoryId,
        page: u32,
    ) -> Result<CategoryQuestions, QuestionServiceError> {
        let category = self
            .categories
            .get_category(category_id)
            .await?
            .ok_or(QuestionServiceError::CategoryNotFound(category_id))?;

        let all = self.questions.questions_in_category(category_id).await?;
        let questions = paginate(&all, page, self.page_size);
        if questions.is_empty() {
            return Err(QuestionServiceError::PageOutOfRange(page));
        }
        Ok(CategoryQuestions {
            category,
            questions,
            total_questions: all.len(),
        })
    }

    /// All questions whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn search(&self, term: &str) -> Result<SearchResults, QuestionServiceError> {
        let questions = self.questions.search_questions(term).await?;
        tracing::debug!(term, matches = questions.len(), "searched questions");
        Ok(SearchResults {
            total_questions: questions.len(),
            questions,
        })
    }

    /// Validate and store a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Question` if a field is missing or invalid.
    /// Returns `QuestionServiceError::UnknownCategory` if the category does not exist.
    /// Returns `QuestionServiceError::Storage` if persistence fails.
    pub async fn create_question(
        &self,
        draft: QuestionDraft,
    ) -> Result<QuestionId, QuestionServiceError> {
        let new = draft.validate()?;

        if self.categories.get_category(new.category).await?.is_none() {
            return Err(QuestionServiceError::UnknownCategory(new.category));
        }

        let category = new.category;
        let id = self
            .questions
            .insert_new_question(NewQuestionRecord::from_new(&new))
            .await
            .map_err(|e| match e {
                // Category removed between the check and the insert.
                StorageError::Conflict => QuestionServiceError::UnknownCategory(category),
                other => other.into(),
            })?;
        tracing::debug!(%id, %category, "created question");
        Ok(id)
    }

    /// Delete a question and return its id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::QuestionNotFound` if no question has this id.
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, QuestionServiceError> {
        match self.questions.delete_question(id).await {
            Ok(()) => {
                tracing::debug!(%id, "deleted question");
                Ok(id)
            }
            Err(StorageError::NotFound) => Err(QuestionServiceError::QuestionNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a question by ID.
    ///
    /// Returns `Ok(None)` when the question does not exist.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn get_question(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionServiceError> {
        let question = self.questions.get_question(id).await?;
        Ok(question)
    }

    /// Total number of stored questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn count_questions(&self) -> Result<u64, QuestionServiceError> {
        let count = self.questions.count_questions().await?;
        Ok(count)
    }
}
