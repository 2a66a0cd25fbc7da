// src/routes/dtos.rs
//
// JSON field names match the web client.

use crate::models::{DailyStat, Pomodoro, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskResponse {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "concluida")]
    pub completed: bool,
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
/// Other fields the client echoes back (`id`, `data_criacao`) are ignored.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "concluida", default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PomodoroResponse {
    pub id: String,
    #[serde(rename = "tarefa_id")]
    pub task_id: String,
    #[serde(rename = "duracao_trabalho")]
    pub work_minutes: i32,
    #[serde(rename = "duracao_descanso")]
    pub rest_minutes: i32,
    #[serde(rename = "data_inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "data_fim")]
    pub ended_at: DateTime<Utc>,
}

impl From<Pomodoro> for PomodoroResponse {
    fn from(pomodoro: Pomodoro) -> Self {
        Self {
            id: pomodoro.id,
            task_id: pomodoro.task_id,
            work_minutes: pomodoro.work_minutes,
            rest_minutes: pomodoro.rest_minutes,
            started_at: pomodoro.started_at,
            ended_at: pomodoro.ended_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PomodoroRequest {
    #[serde(rename = "tarefa_id")]
    pub task_id: String,
    #[serde(rename = "duracao_trabalho", default)]
    pub work_minutes: Option<i32>,
    #[serde(rename = "duracao_descanso", default)]
    pub rest_minutes: Option<i32>,
    #[serde(rename = "data_inicio")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "data_fim")]
    pub ended_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyStatResponse {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "total_pomodoros")]
    pub pomodoros: i64,
    #[serde(rename = "tempo_total_trabalho")]
    pub work_minutes: i64,
    #[serde(rename = "tempo_total_descanso")]
    pub rest_minutes: i64,
}

impl From<DailyStat> for DailyStatResponse {
    fn from(stat: DailyStat) -> Self {
        Self {
            date: stat.date,
            pomodoros: stat.pomodoros,
            work_minutes: stat.work_minutes,
            rest_minutes: stat.rest_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
