use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category, questions::get_questions_for_category},
        Question,
    },
    server::{
        app::AppState,
        extract::{AppPath, AppQuery},
    },
};

use super::{category_map, ApiError, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = category_map(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("No categories available".to_owned()));
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories,
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppQuery(PageQuery { page }): AppQuery<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    if get_category(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Category {id} not found")));
    }

    let questions = get_questions_for_category(&pool, id).await?;
    let total_questions = questions.len();
    let questions = page.window(questions);
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No questions in category {id} on page {}",
            page.number()
        )));
    }

    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions,
        total_questions,
        current_category: id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
