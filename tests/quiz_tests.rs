// tests/quiz_tests.rs

mod common;

use std::collections::HashSet;

use serde_json::{Value, json};
use trivia_api::{cors_layer, create_router, state::AppState, store::SqlStore};

async fn spawn_app(store: SqlStore) -> String {
    let app = create_router(AppState::new(store), cors_layer(None));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn play(client: &reqwest::Client, address: &str, body: Value) -> (u16, Value) {
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status().as_u16();
    (status, response.json().await.expect("Failed to parse json"))
}

#[tokio::test]
async fn quiz() {
    let address = spawn_app(common::seeded_store().await).await;
    let client = reqwest::Client::new();

    let (status, body) = play(
        &client,
        &address,
        json!({
            "previous_questions": [13],
            "quiz_category": { "type": "Geography", "id": "3" }
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 3);
    assert_ne!(body["question"]["id"], 13);
}

#[tokio::test]
async fn quiz_exhausts_category_without_repeats() {
    let address = spawn_app(common::seeded_store().await).await;
    let client = reqwest::Client::new();
    let mut previous: Vec<i64> = vec![13];

    loop {
        let (status, body) = play(
            &client,
            &address,
            json!({
                "previous_questions": previous,
                "quiz_category": { "type": "Geography", "id": 3 }
            }),
        )
        .await;

        if status == 404 {
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Page not found");
            break;
        }

        assert_eq!(status, 200);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {id} was repeated");
        previous.push(id);
        assert!(previous.len() <= 3);
    }

    let asked: HashSet<i64> = previous.into_iter().collect();
    assert_eq!(asked, HashSet::from([11, 12, 13]));
}

#[tokio::test]
async fn quiz_over_all_categories() {
    let address = spawn_app(common::seeded_store().await).await;
    let client = reqwest::Client::new();
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..common::QUESTIONS.len() {
        let (status, body) = play(
            &client,
            &address,
            json!({
                "previous_questions": previous,
                "quiz_category": { "type": "click", "id": 0 }
            }),
        )
        .await;
        assert_eq!(status, 200);
        previous.push(body["question"]["id"].as_i64().unwrap());
    }

    let unique: HashSet<&i64> = previous.iter().collect();
    assert_eq!(unique.len(), common::QUESTIONS.len());

    let (status, _) = play(
        &client,
        &address,
        json!({ "previous_questions": previous, "quiz_category": { "id": 0 } }),
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn quiz_without_previous_questions() {
    let address = spawn_app(common::seeded_store().await).await;
    let client = reqwest::Client::new();

    let (status, body) = play(&client, &address, json!({ "quiz_category": { "id": 1 } })).await;

    assert_eq!(status, 200);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn quiz_failures_are_not_found() {
    let address = spawn_app(common::seeded_store().await).await;
    let client = reqwest::Client::new();

    let bodies = [
        json!({ "previous_questions": [] }),
        json!({ "previous_questions": [], "quiz_category": null }),
        json!({ "previous_questions": [], "quiz_category": { "type": "Science" } }),
        json!({ "previous_questions": [], "quiz_category": { "id": "science" } }),
        json!({ "previous_questions": "13", "quiz_category": { "id": 1 } }),
        json!({ "previous_questions": [], "quiz_category": { "id": 42 } }),
    ];

    for body in bodies {
        let (status, response) = play(&client, &address, body.clone()).await;
        assert_eq!(status, 404, "expected 404 for {body}");
        assert_eq!(response["error"], 404);
    }
}
