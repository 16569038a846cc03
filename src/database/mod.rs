use crate::domain::{NewWorkSession, WorkSession, WorkSessionUpdate};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// shared across handlers behind an Arc; sqlx::Pool is thread safe
// db specific implementations live next to this trait, e.g. "sqlite.rs"
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_latest_sessions(&self, limit: u32) -> Result<Vec<WorkSession>>;

    // write operations
    async fn create_session(&self, session: &NewWorkSession) -> Result<WorkSession>;
    /// Returns `false` when no row has the given id.
    async fn update_session(&self, task_id: i64, update: &WorkSessionUpdate) -> Result<bool>;
    /// Returns `false` when no row has the given id.
    async fn delete_session(&self, task_id: i64) -> Result<bool>;
}
