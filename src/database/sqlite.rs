use crate::database::SessionRepository;
use crate::domain::{NewWorkSession, WorkSession, WorkSessionUpdate};
use crate::features::sessions::model::DbWorkSession;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn get_latest_sessions(&self, limit: u32) -> Result<Vec<WorkSession>> {
        // newest first by id, which is insertion order
        let rows = sqlx::query_as::<_, DbWorkSession>(
            r#"
            SELECT task_id, task_name, time_worked, time_saved
            FROM work_sessions
            ORDER BY task_id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .context("Failed to load latest work sessions")?;

        Ok(rows.into_iter().map(WorkSession::from).collect())
    }

    async fn create_session(&self, session: &NewWorkSession) -> Result<WorkSession> {
        // time_saved comes from the column default
        let row = sqlx::query_as::<_, DbWorkSession>(
            r#"
            INSERT INTO work_sessions (task_name, time_worked)
            VALUES (?, ?)
            RETURNING task_id, task_name, time_worked, time_saved
            "#,
        )
        .bind(&session.task_name)
        .bind(session.time_worked)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert work session")?;

        tracing::debug!("Inserted {} into db.", row);

        Ok(row.into())
    }

    async fn update_session(&self, task_id: i64, update: &WorkSessionUpdate) -> Result<bool> {
        // time_saved keeps its creation value
        let result = sqlx::query(
            r#"
            UPDATE work_sessions
            SET
                task_name = ?,
                time_worked = ?
            WHERE task_id = ?
            "#,
        )
        .bind(&update.task_name)
        .bind(update.time_worked)
        .bind(task_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to update work session {}", task_id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_session(&self, task_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM work_sessions WHERE task_id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete work session {}", task_id))?;

        Ok(result.rows_affected() > 0)
    }
}
