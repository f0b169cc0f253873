use std::fmt;

use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} cannot be empty")]
    EmptyText(&'static str),

    #[error("invalid category id: {0}")]
    InvalidCategory(i64),

    #[error("difficulty must be between {min} and {max}, got {0}", min = Difficulty::MIN, max = Difficulty::MAX)]
    InvalidDifficulty(i64),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty rating of a question, from 1 (easiest) to 5 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a validated difficulty.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidDifficulty` when outside `MIN..=MAX`.
    pub fn new(value: i64) -> Result<Self, QuestionError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(QuestionError::InvalidDifficulty(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A trivia question as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl Question {
    /// Creates a question with an id already assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the question or answer is blank.
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let question = non_blank("question", question.into())?;
        let answer = non_blank("answer", answer.into())?;
        Ok(Self {
            id,
            question,
            answer,
            category,
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Case-insensitive substring match against the question text.
    ///
    /// The answer is never searched. An empty term matches every question.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, QuestionError> {
    if value.trim().is_empty() {
        return Err(QuestionError::EmptyText(field));
    }
    Ok(value)
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Unvalidated question fields as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl QuestionDraft {
    /// Check that every field is present and well-formed.
    ///
    /// Fields are checked in declaration order, so the first missing one is reported.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first field that failed.
    pub fn validate(self) -> Result<NewQuestion, QuestionError> {
        let question = self
            .question
            .ok_or(QuestionError::MissingField("question"))?;
        let answer = self.answer.ok_or(QuestionError::MissingField("answer"))?;
        let category = self
            .category
            .ok_or(QuestionError::MissingField("category"))?;
        let difficulty = self
            .difficulty
            .ok_or(QuestionError::MissingField("difficulty"))?;

        let question = non_blank("question", question)?;
        let answer = non_blank("answer", answer)?;
        let category = u64::try_from(category)
            .ok()
            .filter(|id| *id > 0)
            .map(CategoryId::new)
            .ok_or(QuestionError::InvalidCategory(category))?;
        let difficulty = Difficulty::new(difficulty)?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

impl NewQuestion {
    /// Attach the id assigned by the store.
    #[must_use]
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
