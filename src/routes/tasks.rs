use crate::db::with_connection;
use crate::error::AppError;
use crate::models::Task;
use crate::validation::validate_title;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::{AppState, MessageResponse, TaskRequest, TaskResponse};

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = with_connection(&state.db, "load tasks", Task::find_all).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = with_connection(&state.db, "load task", move |conn| Task::find_by_id(conn, &id))
        .await?
        .ok_or(AppError::NotFound { entity: "Task" })?;
    Ok(Json(TaskResponse::from(task)))
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let Json(request) = payload?;
    let title = validate_title(&request.title)?;

    let task = Task::new(
        title,
        request.description.as_deref().unwrap_or_default(),
        request.completed,
    );
    let task = with_connection(&state.db, "create task", move |conn| {
        task.save(conn)?;
        Ok(task)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Replaces title, description and completion wholesale; omitted fields
/// fall back to their defaults rather than keeping the stored value.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, AppError> {
    let mut task = with_connection(&state.db, "load task", move |conn| Task::find_by_id(conn, &id))
        .await?
        .ok_or(AppError::NotFound { entity: "Task" })?;

    let Json(request) = payload?;
    task.title = validate_title(&request.title)?.to_string();
    task.description = request.description.unwrap_or_default();
    task.completed = request.completed;

    let task = with_connection(&state.db, "update task", move |conn| {
        task.update(conn)?;
        Ok(task)
    })
    .await?;

    Ok(Json(TaskResponse::from(task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = {
        let id = id.clone();
        with_connection(&state.db, "delete task", move |conn| Task::delete(conn, &id)).await?
    };
    if !removed {
        log::debug!("Delete of unknown task {id} affected no rows");
    }
    Ok(Json(MessageResponse {
        message: "Task deleted".to_string(),
    }))
}
