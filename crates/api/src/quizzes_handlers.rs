//! `POST /quizzes`

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;
use trivia_core::model::{CategoryId, QuestionId, QuizRound};

use crate::dto::{QuestionView, QuizRequest, QuizResponse};
use crate::error::ApiError;
use crate::state::ApiState;

/// `quiz_category.id` value meaning "every category".
pub const ALL_CATEGORIES_ID: u64 = 0;

/// Turn the client's quiz state into a round.
///
/// Any structural problem, including a body with neither expected key, is
/// answered with not-found rather than bad-request; existing clients rely on it.
pub fn quiz_round(request: QuizRequest) -> Result<QuizRound, ApiError> {
    if request.previous_questions.is_none() && request.quiz_category.is_none() {
        return Err(ApiError::NotFound);
    }

    let previous = request
        .previous_questions
        .unwrap_or_default()
        .iter()
        .map(|id| id.as_u64().map(QuestionId::new).ok_or(ApiError::NotFound))
        .collect::<Result<Vec<_>, _>>()?;

    let category = match request.quiz_category {
        None => None,
        Some(payload) => match payload.id.as_u64() {
            Some(ALL_CATEGORIES_ID) => None,
            Some(id) => Some(CategoryId::new(id)),
            None => return Err(ApiError::NotFound),
        },
    };

    Ok(QuizRound::new(previous, category))
}

/// Draw the next unseen question for a quiz in progress.
pub async fn next_question(
    State(state): State<ApiState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = body.map_err(|_| ApiError::NotFound)?;
    if let Some(category) = &request.quiz_category {
        info!(
            "Playing quiz, category {:?} ({:?})",
            category.id, category.kind
        );
    }
    let round = quiz_round(request)?;
    info!(
        "Drawing quiz question, {} already asked",
        round.previous_questions().len()
    );

    let question = state.quiz.next_question(&round).await?;
    Ok(Json(QuizResponse {
        success: true,
        question: question.as_ref().map(QuestionView::from),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{NumberLike, QuizCategoryPayload};

    fn payload(id: NumberLike) -> Option<QuizCategoryPayload> {
        Some(QuizCategoryPayload {
            kind: Some("Art".into()),
            id,
        })
    }

    #[test]
    fn string_category_id_is_accepted() {
        let round = quiz_round(QuizRequest {
            previous_questions: Some(vec![]),
            quiz_category: payload(NumberLike::Text("2".into())),
        })
        .unwrap();
        assert_eq!(round.category(), Some(CategoryId::new(2)));
    }

    #[test]
    fn category_zero_means_all() {
        let round = quiz_round(QuizRequest {
            previous_questions: Some(vec![NumberLike::Int(4)]),
            quiz_category: payload(NumberLike::Int(0)),
        })
        .unwrap();
        assert_eq!(round.category(), None);
        assert!(round.was_asked(QuestionId::new(4)));
    }

    #[test]
    fn empty_body_is_not_found() {
        let err = quiz_round(QuizRequest {
            previous_questions: None,
            quiz_category: None,
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        let err = quiz_round(QuizRequest {
            previous_questions: Some(vec![NumberLike::Text("five".into())]),
            quiz_category: None,
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));

        let err = quiz_round(QuizRequest {
            previous_questions: None,
            quiz_category: payload(NumberLike::Text("History".into())),
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
