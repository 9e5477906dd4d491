mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::pagination::Page;

use super::deserializers::deserialize_page;
use super::error::{ApiError, ApiResponse};

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_page")]
    page: Page,
}

/// Categories keyed by id, the shape the game client renders.
async fn category_map(pool: &SqlitePool) -> sqlx::Result<BTreeMap<i64, String>> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect())
}
