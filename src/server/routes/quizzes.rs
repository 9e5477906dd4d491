use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_category,
            questions::{get_all_questions, get_questions_for_category},
        },
        Question,
    },
    quiz::{self, ALL_CATEGORIES},
    server::{app::AppState, deserializers::serialize_question_or_false, extract::AppJson},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizBody {
    success: bool,
    #[serde(serialize_with = "serialize_question_or_false")]
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(request): AppJson<QuizRequest>,
) -> ApiResponse<Json<QuizBody>> {
    let category = request.quiz_category.id;
    let (candidates, label) = if category == ALL_CATEGORIES {
        (get_all_questions(&pool).await?, "all".to_owned())
    } else {
        let Some(found) = get_category(&pool, category).await? else {
            return Err(ApiError::InvalidRequest(format!(
                "Unknown quiz category {category}"
            )));
        };
        (get_questions_for_category(&pool, category).await?, found.kind)
    };

    let question = quiz::pick_next(
        candidates,
        &request.previous_questions,
        &mut rand::thread_rng(),
    );
    match &question {
        Some(next) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
            tracing::debug!(id = next.id, category, "quiz question served");
        }
        None => tracing::debug!(category, "quiz exhausted"),
    }

    Ok(Json(QuizBody {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
