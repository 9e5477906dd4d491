pub mod csv_io;
pub mod queries;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

use sqlx::Error;

pub async fn establish_connection(url: &str) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePoolOptions::new().connect_with(options).await
}

/// Single-connection in-memory pool. Every pooled connection to `sqlite::memory:`
/// opens its own database, so the pool must never grow or recycle.
pub async fn establish_in_memory() -> Result<SqlitePool, Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Labels inserted by `seed`, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Inserts [`DEFAULT_CATEGORIES`] unless some category already exists.
pub async fn seed_categories(pool: &SqlitePool) -> Result<usize, Error> {
    if !queries::categories::get_all_categories(pool).await?.is_empty() {
        return Ok(0);
    }
    let mut tx = pool.begin().await?;
    for kind in DEFAULT_CATEGORIES {
        queries::categories::create_category(&mut *tx, kind).await?;
    }
    tx.commit().await?;
    Ok(DEFAULT_CATEGORIES.len())
}
