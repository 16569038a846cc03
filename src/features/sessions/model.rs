use crate::domain::WorkSession;
use chrono::NaiveDateTime;
use derive_more::derive::Display;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone, Display)]
#[display("work session {}", task_id)]
pub struct DbWorkSession {
    pub task_id: i64,
    pub task_name: Option<String>,
    pub time_worked: Option<i64>,
    pub time_saved: NaiveDateTime,
}

impl From<DbWorkSession> for WorkSession {
    fn from(row: DbWorkSession) -> Self {
        WorkSession {
            task_id: row.task_id,
            task_name: row.task_name,
            time_worked: row.time_worked,
            time_saved: row.time_saved,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonWorkSession {
    pub task_id: i64,
    pub task_name: Option<String>,
    pub time_worked: Option<i64>,
    pub time_saved: String,
}

/// Body of `POST /task`. Missing or wrongly typed fields decode as `None`.
#[derive(Deserialize, Debug, Default)]
pub struct CreateTaskRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub time: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct CreateTaskResponse {
    pub task: Option<String>,
}

/// Body of `PUT /task/{task_id}`, with the same leniency as `CreateTaskRequest`.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub time_worked: Option<i64>,
}

// any non-string value becomes None
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

// only JSON integers that fit in i64 survive; "90", 1.5 and 1500.0 become None
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_i64()),
        _ => Ok(None),
    }
}

/// Result of a mutation addressed by id.
///
/// A missing row is reported in the body with a 200 status, so the two shapes
/// share a response type rather than going through `ApiError`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum TaskOutcome {
    Message { message: String },
    Error { error: String },
}

impl TaskOutcome {
    pub fn updated() -> Self {
        TaskOutcome::Message {
            message: "Task updated successfully".to_string(),
        }
    }

    pub fn deleted() -> Self {
        TaskOutcome::Message {
            message: "Task deleted successfully".to_string(),
        }
    }

    pub fn not_found() -> Self {
        TaskOutcome::Error {
            error: "Task not found".to_string(),
        }
    }
}
