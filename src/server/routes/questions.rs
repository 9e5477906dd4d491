use std::collections::BTreeMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{self, get_all_questions, get_question_by_id, search_questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        extract::{AppJson, AppPath, AppQuery},
    },
    telemetry::QUESTIONS_CREATED,
};

use super::{category_map, ApiError, ApiResponse, PageQuery};

/// Body of `POST /questions`: a search when `searchTerm` is set, a new question otherwise.
#[derive(Deserialize)]
struct QuestionSubmission {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::InvalidRequest(format!("{field} must not be blank"))),
    }
}

fn required_number(value: Option<i64>, field: &str) -> Result<i64, ApiError> {
    value.ok_or_else(|| ApiError::InvalidRequest(format!("{field} must be an integer")))
}

impl TryFrom<QuestionSubmission> for NewQuestion {
    type Error = ApiError;

    fn try_from(submission: QuestionSubmission) -> Result<Self, Self::Error> {
        Ok(NewQuestion {
            question: required_text(submission.question, "question")?,
            answer: required_text(submission.answer, "answer")?,
            category: required_number(submission.category, "category")?,
            difficulty: required_number(submission.difficulty, "difficulty")?,
        })
    }
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = get_all_questions(&pool).await?;
    let total_questions = questions.len();
    let questions = page.window(questions);
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No questions on page {}",
            page.number()
        )));
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions,
        categories: category_map(&pool).await?,
        current_category: None,
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
    AppJson(mut submission): AppJson<QuestionSubmission>,
) -> ApiResponse<Response> {
    if let Some(term) = submission.search_term.take() {
        let matches = search_questions(&pool, &term).await?;
        tracing::debug!(term = %term, matches = matches.len(), "question search");
        let total_questions = matches.len();
        return Ok(Json(SearchResults {
            success: true,
            questions: page.window(matches),
            total_questions,
            current_category: serde_json::Map::new(),
        })
        .into_response());
    }

    let new_question = NewQuestion::try_from(submission)?;
    let id = questions::create_question(&pool, &new_question).await?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, category = new_question.category, "question created");

    Ok(Json(Created {
        success: true,
        created: id,
    })
    .into_response())
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
) -> ApiResponse<Json<Deleted>> {
    let not_found = || ApiError::NotFound(format!("Question {id} not found"));
    let question = get_question_by_id(&pool, id).await?.ok_or_else(not_found)?;
    // a concurrent delete may win between the lookup and ours
    if !questions::delete_question(&pool, question.id).await? {
        return Err(not_found());
    }
    tracing::info!(id, "question deleted");

    let remaining = get_all_questions(&pool).await?;
    let total_questions = remaining.len();
    Ok(Json(Deleted {
        success: true,
        deleted: id,
        questions: page.window(remaining),
        total_questions,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
