use crate::db::with_connection;
use crate::error::AppError;
use crate::models::{DailyStat, Pomodoro};
use crate::validation::{resolve_rest_minutes, resolve_work_minutes, validate_task_ref};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::{AppState, DailyStatResponse, PomodoroRequest, PomodoroResponse};

pub async fn create_pomodoro(
    State(state): State<AppState>,
    payload: Result<Json<PomodoroRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PomodoroResponse>), AppError> {
    let Json(request) = payload?;
    let task_id = validate_task_ref(&request.task_id)?;
    let work_minutes = resolve_work_minutes(request.work_minutes)?;
    let rest_minutes = resolve_rest_minutes(request.rest_minutes)?;

    let pomodoro = Pomodoro::new(
        task_id,
        work_minutes,
        rest_minutes,
        request.started_at,
        request.ended_at,
    );
    let pomodoro = with_connection(&state.db, "create pomodoro", move |conn| {
        pomodoro.save(conn)?;
        Ok(pomodoro)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(PomodoroResponse::from(pomodoro))))
}

pub async fn get_daily_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyStatResponse>>, AppError> {
    let stats = with_connection(&state.db, "load daily statistics", DailyStat::recent).await?;
    Ok(Json(stats.into_iter().map(DailyStatResponse::from).collect()))
}

pub async fn get_pomodoros_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Vec<PomodoroResponse>>, AppError> {
    let pomodoros = with_connection(&state.db, "load pomodoros", move |conn| {
        Pomodoro::find_by_task(conn, &task_id)
    })
    .await?;
    Ok(Json(pomodoros.into_iter().map(PomodoroResponse::from).collect()))
}
