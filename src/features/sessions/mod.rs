pub mod model;

use crate::AppState;
use crate::domain::{NewWorkSession, WorkSession, WorkSessionUpdate};
use crate::error::ApiError;
use crate::extract::JsonBody;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use model::{CreateTaskRequest, CreateTaskResponse, JsonWorkSession, TaskOutcome, UpdateTaskRequest};

/// Upper bound on rows returned by `GET /latest-session`.
pub const LATEST_SESSIONS_LIMIT: u32 = 10;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn sessions_router() -> Router<AppState> {
    Router::new()
        .route("/task", post(create_task_handler))
        .route(
            "/task/{task_id}",
            put(update_task_handler).delete(delete_task_handler),
        )
        .route("/latest-session", get(latest_sessions_handler))
}

async fn create_task_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    tracing::info!("Received task: {:?}", body.task);

    let draft = NewWorkSession {
        task_name: body.task,
        time_worked: body.time,
    };
    let session = state.repo.create_session(&draft).await?;

    Ok(Json(CreateTaskResponse {
        task: session.task_name,
    }))
}

async fn latest_sessions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonWorkSession>>, ApiError> {
    let sessions = state
        .repo
        .get_latest_sessions(LATEST_SESSIONS_LIMIT)
        .await?;

    let json_sessions: Vec<JsonWorkSession> = sessions
        .iter()
        .map(|s| session_to_json_session(s, TIMESTAMP_FORMAT))
        .collect();

    Ok(Json(json_sessions))
}

async fn update_task_handler(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    JsonBody(body): JsonBody<UpdateTaskRequest>,
) -> Result<Json<TaskOutcome>, ApiError> {
    let update = WorkSessionUpdate {
        task_name: body.task_name,
        time_worked: body.time_worked,
    };

    if state.repo.update_session(task_id, &update).await? {
        tracing::info!("Updated task {}", task_id);
        Ok(Json(TaskOutcome::updated()))
    } else {
        tracing::warn!("Update requested for unknown task {}", task_id);
        Ok(Json(TaskOutcome::not_found()))
    }
}

async fn delete_task_handler(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskOutcome>, ApiError> {
    if state.repo.delete_session(task_id).await? {
        tracing::info!("Deleted task {}", task_id);
        Ok(Json(TaskOutcome::deleted()))
    } else {
        tracing::warn!("Delete requested for unknown task {}", task_id);
        Ok(Json(TaskOutcome::not_found()))
    }
}

pub fn session_to_json_session(session: &WorkSession, format: &str) -> JsonWorkSession {
    JsonWorkSession {
        task_id: session.task_id,
        task_name: session.task_name.to_owned(),
        time_worked: session.time_worked,
        time_saved: session.time_saved.format(format).to_string(),
    }
}
