use crate::AppState;
use crate::config::WorklogConfig;
use crate::database::sqlite::SqliteRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

mod unit_sqlite_sessions_database;

// fresh in-memory database with the schema applied
// a single connection keeps every query on the same in-memory db
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn setup_test_state() -> AppState {
    let pool = setup_test_pool().await;
    AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
    }
}

pub fn test_config() -> WorklogConfig {
    WorklogConfig::from_lookup(|_| None).expect("defaults should parse")
}
