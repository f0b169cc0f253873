use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use services::{AppServices, RandomSource};
use storage::fixtures::{SAMPLE_QUESTIONS, seed_sample_data};
use storage::repository::Storage;
use tower::ServiceExt;

async fn app(db_name: &str) -> (Router, Storage) {
    let url = format!("sqlite:file:{db_name}?mode=memory&cache=shared");
    let storage = Storage::sqlite(&url).await.expect("connect sqlite");
    seed_sample_data(&storage).await.expect("seed");
    let services = AppServices::from_storage(&storage, 10, RandomSource::thread()).unwrap();
    (api::create_router(api::ApiState::from(&services)), storage)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn assert_error(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(status.as_u16()));
    assert_eq!(body["message"], json!(message));
}

#[tokio::test]
async fn get_categories() {
    let (app, _) = app("memdb_api_categories").await;
    let (status, body) = send(&app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["categories"]["1"], json!("Science"));
    assert_eq!(body["categories"]["6"], json!("Sports"));
}

#[tokio::test]
async fn get_single_category_is_not_a_route() {
    let (app, _) = app("memdb_api_category_id").await;
    let (status, body) = send(&app, Method::GET, "/categories/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, status, "resource not found");
}

#[tokio::test]
async fn get_paginated_questions() {
    let (app, _) = app("memdb_api_questions").await;
    for uri in ["/questions", "/questions?page=1", "/questions?page=abc"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["totalQuestions"], json!(SAMPLE_QUESTIONS.len()));
        assert_eq!(body["categories"].as_object().unwrap().len(), 6);
        assert!(body["currentCategory"].is_null());
    }

    let (status, body) = send(&app, Method::GET, "/questions?page=1&page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["id"], json!(1));

    let (status, body) = send(&app, Method::GET, "/questions?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["id"], json!(11));
}

#[tokio::test]
async fn questions_beyond_valid_page_are_not_found() {
    let (app, _) = app("memdb_api_questions_404").await;
    for uri in ["/questions?page=9999", "/questions?page=1000", "/questions?page=0"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_error(&body, status, "resource not found");
    }
}

#[tokio::test]
async fn get_single_question_is_method_not_allowed() {
    let (app, _) = app("memdb_api_question_405").await;
    let (status, body) = send(&app, Method::GET, "/questions/5", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error(&body, status, "method not allowed");
}

#[tokio::test]
async fn add_question() {
    let (app, storage) = app("memdb_api_add").await;
    let before = storage.questions.count_questions().await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "Whats is Caryn McCarthy's favorite author?",
            "answer": "Neill Gaiman",
            "difficulty": 1,
            "category": 2
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let after = storage.questions.count_questions().await.unwrap();
    assert_eq!(after, before + 1);
    assert_eq!(body["totalQuestions"], json!(after));
    assert!(body["created"].as_u64().is_some());
}

#[tokio::test]
async fn add_question_accepts_numeric_strings() {
    let (app, _) = app("memdb_api_add_strings").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the capital of Australia?",
            "answer": "Canberra",
            "difficulty": "2",
            "category": "3"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn add_question_missing_difficulty_is_unprocessable() {
    let (app, storage) = app("memdb_api_add_422").await;
    let before = storage.questions.count_questions().await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What planet is closed to the sun?",
            "answer": "Mercury",
            "category": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, status, "unprocessable");
    assert_eq!(storage.questions.count_questions().await.unwrap(), before);
}

#[tokio::test]
async fn add_question_with_bad_fields_is_unprocessable() {
    let (app, _) = app("memdb_api_add_bad").await;
    let bodies = [
        json!({"question": "Q?", "answer": "A", "category": 99, "difficulty": 1}),
        json!({"question": "Q?", "answer": "A", "category": 1, "difficulty": 9}),
        json!({"question": "Q?", "answer": "A", "category": "Science", "difficulty": 1}),
        json!({"question": "Q?", "answer": "A", "category": 1, "difficulty": [1]}),
    ];
    for body in bodies {
        let (status, _) = send(&app, Method::POST, "/questions", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, _) = app("memdb_api_bad_json").await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_questions() {
    let (app, _) = app("memdb_api_search").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "Peanut"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 1);
    assert_eq!(body["totalQuestions"], json!(1));
}

#[tokio::test]
async fn search_without_matches_succeeds() {
    let (app, _) = app("memdb_api_search_empty").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "xylophone"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_question() {
    let (app, storage) = app("memdb_api_delete").await;
    let before = storage.questions.count_questions().await.unwrap();

    let (status, body) = send(&app, Method::DELETE, "/questions/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], json!(2));
    assert_eq!(storage.questions.count_questions().await.unwrap(), before - 1);

    let (status, body) = send(&app, Method::DELETE, "/questions/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, status, "resource not found");
}

#[tokio::test]
async fn delete_unknown_question_is_not_found() {
    let (app, storage) = app("memdb_api_delete_404").await;
    let before = storage.questions.count_questions().await.unwrap();

    for uri in ["/questions/9999", "/questions/abc"] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_error(&body, status, "resource not found");
    }
    assert_eq!(storage.questions.count_questions().await.unwrap(), before);
}

#[tokio::test]
async fn get_questions_by_category() {
    let (app, _) = app("memdb_api_by_category").await;
    for uri in ["/categories/2/questions", "/categories/1/questions?page=1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body["totalQuestions"].as_u64().unwrap() > 0);
        assert!(!body["questions"].as_array().unwrap().is_empty());
    }

    let (_, body) = send(&app, Method::GET, "/categories/2/questions", None).await;
    assert_eq!(body["currentCategory"], json!("Art"));
    assert!(
        body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == json!(2))
    );
}

#[tokio::test]
async fn questions_for_missing_category_or_page_are_not_found() {
    let (app, _) = app("memdb_api_by_category_404").await;
    for uri in ["/categories/99/questions", "/categories/1/questions?page=100"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_error(&body, status, "resource not found");
    }
}

#[tokio::test]
async fn play_quiz() {
    let (app, _) = app("memdb_api_quiz").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": "2"}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"]["category"], json!(2));
    assert!(body["question"]["question"].as_str().is_some());
}

#[tokio::test]
async fn play_quiz_until_exhausted() {
    let (app, _) = app("memdb_api_quiz_done").await;
    let mut previous: Vec<u64> = Vec::new();
    loop {
        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({"previous_questions": previous, "quiz_category": {"type": "Sports", "id": 6}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        match body["question"]["id"].as_u64() {
            Some(id) => {
                assert!(!previous.contains(&id));
                previous.push(id);
            }
            None => {
                assert!(body["question"].is_null());
                break;
            }
        }
    }
    assert_eq!(previous.len(), 2);
}

#[tokio::test]
async fn play_quiz_all_categories() {
    let (app, _) = app("memdb_api_quiz_all").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": [1, 2], "quiz_category": {"type": "click", "id": 0}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["question"]["id"].as_u64().unwrap();
    assert!(id != 1 && id != 2);
}

#[tokio::test]
async fn play_quiz_with_malformed_category_is_not_found() {
    let (app, _) = app("memdb_api_quiz_404").await;
    let bodies = [
        json!({"quiz_category": "History", "previous_questions": [5]}),
        json!({"01": "Dump content", "02": "Still dump content"}),
        json!({"previous_questions": [], "quiz_category": {"type": "Nope", "id": 99}}),
    ];
    for body in bodies {
        let (status, resp) = send(&app, Method::POST, "/quizzes", Some(body.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
        assert_error(&resp, status, "resource not found");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (app, _) = app("memdb_api_unknown").await;
    let (status, body) = send(&app, Method::GET, "/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, status, "resource not found");
}
