//! Question listing, search, creation, and deletion.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use tracing::info;
use trivia_core::model::{CategoryId, QuestionDraft, QuestionId};

use crate::dto::{
    CreatedResponse, DeletedResponse, NumberLike, PageQuery, QuestionListResponse,
    QuestionsPostRequest, category_map, question_views,
};
use crate::error::ApiError;
use crate::state::ApiState;

/// A query string that does not deserialize (such as a repeated `page`) reads as page 1.
fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> u32 {
    query.map_or(1, |Query(query)| query.page())
}

/// An id in the path that is not a number names no resource.
fn path_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    let Path(id) = path.map_err(|_| ApiError::NotFound)?;
    Ok(id)
}

/// A numeric body field that is present but not a number cannot be processed.
fn number_field(value: Option<NumberLike>) -> Result<Option<i64>, ApiError> {
    value
        .map(|v| v.as_i64().ok_or(ApiError::Unprocessable))
        .transpose()
}

/// Page through all questions, with the category map the client needs for display.
pub async fn list_questions(
    State(state): State<ApiState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = page_query(query);
    info!("Listing questions, page {}", page);

    let result = state.questions.list_questions(page).await?;
    let categories = state.categories.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: question_views(&result.questions),
        total_questions: result.total_questions,
        categories: Some(category_map(&categories)),
        current_category: None,
    }))
}

/// Page through the questions of one category.
pub async fn questions_in_category(
    State(state): State<ApiState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let category_id = CategoryId::new(path_id(path)?);
    let page = page_query(query);
    info!("Listing questions in category {}, page {}", category_id, page);

    let result = state
        .questions
        .questions_in_category(category_id, page)
        .await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: question_views(&result.questions),
        total_questions: result.total_questions,
        categories: None,
        current_category: Some(result.category.kind().to_string()),
    }))
}

/// `POST /questions`: search when the body carries `searchTerm`, otherwise create.
pub async fn post_questions(
    State(state): State<ApiState>,
    body: Result<Json<QuestionsPostRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut body) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
        _ => ApiError::BadRequest,
    })?;

    match body.search_term.take() {
        Some(term) => search_questions(&state, &term).await,
        None => create_question(&state, body).await,
    }
}

async fn search_questions(state: &ApiState, term: &str) -> Result<Response, ApiError> {
    info!("Searching questions for {:?}", term);

    let results = state.questions.search(term).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: question_views(&results.questions),
        total_questions: results.total_questions,
        categories: None,
        current_category: None,
    })
    .into_response())
}

async fn create_question(
    state: &ApiState,
    body: QuestionsPostRequest,
) -> Result<Response, ApiError> {
    info!("Creating question");

    let draft = QuestionDraft {
        question: body.question,
        answer: body.answer,
        category: number_field(body.category)?,
        difficulty: number_field(body.difficulty)?,
    };
    let created = state.questions.create_question(draft).await?;
    let total_questions = state.questions.count_questions().await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.value(),
        total_questions,
    })
    .into_response())
}

/// Delete a question by id.
pub async fn delete_question(
    State(state): State<ApiState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let question_id = QuestionId::new(path_id(path)?);
    info!("Deleting question {}", question_id);

    let deleted = state.questions.delete_question(question_id).await?;
    let total_questions = state.questions.count_questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: deleted.value(),
        total_questions,
    }))
}
