use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category<'e>(
    executor: impl SqliteExecutor<'e>,
    kind: &str,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Inserts categories whose id is not yet taken, returning how many were added.
pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for category in categories {
        inserted += sqlx::query(
            r#"
INSERT INTO categories (id, type) VALUES (?1, ?2) ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}
