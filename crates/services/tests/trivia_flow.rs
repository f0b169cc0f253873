use services::{AppServices, QuestionServiceError, RandomSource};
use storage::fixtures::{SAMPLE_QUESTIONS, seed_sample_data};
use storage::repository::Storage;
use trivia_core::model::{CategoryId, QuestionDraft, QuizRound};

#[tokio::test]
async fn trivia_flow_create_search_quiz_delete() {
    let storage = Storage::sqlite("sqlite:file:memdb_trivia_flow?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    seed_sample_data(&storage).await.expect("seed");
    let services =
        AppServices::from_storage(&storage, 10, RandomSource::seeded(5)).expect("services");
    let questions = services.questions();

    let first = questions.list_questions(1).await.expect("page 1");
    assert_eq!(first.total_questions, SAMPLE_QUESTIONS.len());
    assert!(matches!(
        questions.list_questions(9999).await,
        Err(QuestionServiceError::PageOutOfRange(9999))
    ));

    let created = questions
        .create_question(QuestionDraft {
            question: Some("Which element has the atomic number 1?".into()),
            answer: Some("Hydrogen".into()),
            category: Some(1),
            difficulty: Some(1),
        })
        .await
        .expect("create");

    let hits = questions.search("atomic number").await.expect("search");
    assert_eq!(hits.questions.len(), 1);
    assert_eq!(hits.questions[0].id(), created);

    // A quiz that has already seen everything else in Science must land on the new question.
    let science = questions
        .questions_in_category(CategoryId::new(1), 1)
        .await
        .expect("science");
    let seen = science
        .questions
        .iter()
        .map(|q| q.id())
        .filter(|id| *id != created);
    let round = QuizRound::new(seen, Some(CategoryId::new(1)));
    let next = services
        .quiz()
        .next_question(&round)
        .await
        .expect("quiz")
        .expect("one question left");
    assert_eq!(next.id(), created);

    questions.delete_question(created).await.expect("delete");
    assert!(questions.get_question(created).await.expect("get").is_none());
    assert!(services
        .quiz()
        .next_question(&round)
        .await
        .expect("quiz")
        .is_none());
}
