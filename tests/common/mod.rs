#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::{
    self,
    queries::{categories::create_category, questions::create_question},
    NewQuestion,
};
use trivia_api::server::app::{build_router, AppState};

pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

impl TestApp {
    pub async fn empty() -> Self {
        let pool = db::establish_in_memory().await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        let router = build_router(AppState::new(pool.clone()), Duration::from_secs(5));
        Self { pool, router }
    }

    pub async fn with_categories(labels: &[&str]) -> (Self, Vec<i64>) {
        let app = Self::empty().await;
        let mut ids = Vec::new();
        for label in labels {
            ids.push(create_category(&app.pool, label).await.unwrap());
        }
        (app, ids)
    }

    pub async fn add_question(&self, text: &str, category: i64) -> i64 {
        create_question(
            &self.pool,
            &NewQuestion {
                question: text.to_owned(),
                answer: "answer".to_owned(),
                category,
                difficulty: 1,
            },
        )
        .await
        .unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|question| question["id"].as_i64().unwrap())
        .collect()
}
