//! Request and response bodies as they appear on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trivia_core::model::{Category, Question};

/// `{"<id>": "<type>"}`, ordered by id.
pub type CategoryMap = BTreeMap<u64, String>;

#[must_use]
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id().value(), c.kind().to_string()))
        .collect()
}

/// A number that clients may send either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Int(i64),
    Text(String),
}

impl NumberLike {
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberLike::Int(v) => Some(*v),
            NumberLike::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Non-negative value, as used by ids.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_i64().and_then(|v| u64::try_from(v).ok())
    }
}

/// `?page=N`. Kept as text so a malformed value falls back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Page 1 when absent or unparsable; 0 (always empty) when not positive.
    #[must_use]
    pub fn page(&self) -> u32 {
        match self.page.as_deref().map(|p| p.trim().parse::<i64>()) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) if n < 1 => 0,
            Some(Ok(n)) => u32::try_from(n).unwrap_or(u32::MAX),
        }
    }
}

/// Body of `POST /questions`: a search when `searchTerm` is present, a create otherwise.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<NumberLike>,
    pub difficulty: Option<NumberLike>,
}

/// `quiz_category` as sent by the quiz client. An id of 0 selects every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryPayload {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub id: NumberLike,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<NumberLike>>,
    pub quiz_category: Option<QuizCategoryPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub category: u64,
    pub difficulty: u8,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id().value(),
            question: q.question().to_string(),
            answer: q.answer().to_string(),
            category: q.category().value(),
            difficulty: q.difficulty().value(),
        }
    }
}

#[must_use]
pub fn question_views(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(QuestionView::from).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Shared shape of the question list, category, and search responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub success: bool,
    pub created: u64,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: u64,
    pub total_questions: u64,
}

/// `question` is `null` once the quiz has run out of questions.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionView>,
}
