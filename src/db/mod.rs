use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

/// Builds the shared pool from `DATABASE_URL` and applies pending
/// migrations. A missing or unreachable database aborts startup instead
/// of leaving the process running without a usable connection.
pub async fn get_db_pool() -> SqlitePool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
