use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trivia_core::model::{
    Category, CategoryId, Difficulty, NewQuestion, Question, QuestionError, QuestionId,
};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Insert shape for a question whose id the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestionRecord {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestionRecord {
    #[must_use]
    pub fn from_new(question: &NewQuestion) -> Self {
        Self {
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty.value(),
        }
    }

    /// Convert the record into a domain `Question` once an id is known.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the persisted fields no longer validate.
    pub fn into_question(self, id: QuestionId) -> Result<Question, QuestionError> {
        Question::new(
            id,
            self.question,
            self.answer,
            self.category,
            Difficulty::new(i64::from(self.difficulty))?,
        )
    }
}

/// Repository contract for questions. Every list is ordered by id ascending.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// List every question.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Fetch a question by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures; a missing row is `Ok(None)`.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError>;

    /// Insert a question and return the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn insert_new_question(
        &self,
        question: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError>;

    /// Delete a question by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no question has this id.
    async fn delete_question(&self, id: QuestionId) -> Result<(), StorageError>;

    /// Questions whose category equals `category`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;

    /// Total number of stored questions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn count_questions(&self) -> Result<u64, StorageError>;
}

/// Repository contract for categories. Read-mostly; writes are for seeding.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Fetch a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures; a missing row is `Ok(None)`.
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StorageError>;

    /// Persist or rename a category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the category cannot be stored.
    async fn upsert_category(&self, category: &Category) -> Result<(), StorageError>;
}

#[derive(Default)]
struct QuestionTable {
    next_id: u64,
    rows: BTreeMap<QuestionId, Question>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<QuestionTable>>,
    categories: Arc<Mutex<BTreeMap<CategoryId, Category>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(
        &self,
        keep: impl Fn(&Question) -> bool,
    ) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.values().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        self.filtered(|_| true)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.get(&id).cloned())
    }

    async fn insert_new_question(
        &self,
        question: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError> {
        {
            let categories = self
                .categories
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            if !categories.contains_key(&question.category) {
                return Err(StorageError::Conflict);
            }
        }

        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_id += 1;
        let id = QuestionId::new(guard.next_id);
        let question = question
            .into_question(id)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        guard.rows.insert(id, question);
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError> {
        self.filtered(|q| q.category() == category)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        self.filtered(|q| q.matches_term(term))
    }

    async fn count_questions(&self) -> Result<u64, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.len() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn upsert_category(&self, category: &Category) -> Result<(), StorageError> {
        let mut guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(category.id(), category.clone());
        Ok(())
    }
}

/// Aggregates question and category repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo);
        Self {
            questions,
            categories,
        }
    }
}
