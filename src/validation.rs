use crate::constants::{DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES};
use crate::error::AppError;

/// Validate a task title. Returns the trimmed title.
pub fn validate_title(title: &str) -> Result<&str, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput {
            field: "titulo",
            reason: "cannot be empty".into(),
        });
    }
    Ok(title)
}

/// Validate the task reference of a pomodoro.
/// The referenced task is not required to exist.
pub fn validate_task_ref(task_id: &str) -> Result<&str, AppError> {
    let task_id = task_id.trim();
    if task_id.is_empty() {
        return Err(AppError::InvalidInput {
            field: "tarefa_id",
            reason: "cannot be empty".into(),
        });
    }
    Ok(task_id)
}

fn resolve_minutes(field: &'static str, minutes: Option<i32>, default: i32) -> Result<i32, AppError> {
    match minutes {
        None | Some(0) => Ok(default),
        Some(m) if m < 0 => Err(AppError::InvalidInput {
            field,
            reason: "cannot be negative".into(),
        }),
        Some(m) => Ok(m),
    }
}

/// Resolve work minutes, falling back to the default when absent or zero.
pub fn resolve_work_minutes(minutes: Option<i32>) -> Result<i32, AppError> {
    resolve_minutes("duracao_trabalho", minutes, DEFAULT_WORK_MINUTES)
}

/// Resolve rest minutes, falling back to the default when absent or zero.
pub fn resolve_rest_minutes(minutes: Option<i32>) -> Result<i32, AppError> {
    resolve_minutes("duracao_descanso", minutes, DEFAULT_REST_MINUTES)
}
