mod common;

use axum::http::StatusCode;
use common::{ids, TestApp};
use serde_json::json;

#[tokio::test]
async fn lists_categories_by_id() {
    let (app, cats) = TestApp::with_categories(&["Science", "Art"]).await;

    let (status, body) = app.get("/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["categories"],
        json!({ (cats[0].to_string()): "Science", (cats[1].to_string()): "Art" })
    );
}

#[tokio::test]
async fn empty_category_table_is_not_found() {
    let app = TestApp::empty().await;

    let (status, body) = app.get("/categories").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn filters_questions_by_category() {
    let (app, cats) = TestApp::with_categories(&["Science", "Art"]).await;
    let water = app.add_question("What is H2O?", cats[0]).await;
    app.add_question("Who painted the Mona Lisa?", cats[1]).await;
    let gold = app.add_question("What is Au?", cats[0]).await;

    let (status, body) = app
        .get(&format!("/categories/{}/questions", cats[0]))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![water, gold]);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(body["current_category"], cats[0]);
}

#[tokio::test]
async fn category_listing_paginates() {
    let (app, cats) = TestApp::with_categories(&["Science"]).await;
    for n in 0..12 {
        app.add_question(&format!("Question {n}?"), cats[0]).await;
    }

    let (status, body) = app
        .get(&format!("/categories/{}/questions?page=2", cats[0]))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 2);
    assert_eq!(body["total_questions"], 12);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let (app, _) = TestApp::with_categories(&["Science"]).await;

    let (status, body) = app.get("/categories/999/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Category 999"));
}

#[tokio::test]
async fn known_category_without_questions_is_not_found() {
    let (app, cats) = TestApp::with_categories(&["Science"]).await;

    let (status, body) = app
        .get(&format!("/categories/{}/questions", cats[0]))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("page 1"));
}

#[tokio::test]
async fn non_numeric_category_id_is_not_found() {
    let (app, _) = TestApp::with_categories(&["Science"]).await;

    let (status, body) = app.get("/categories/science/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
