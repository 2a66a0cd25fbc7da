// src/routes/mod.rs
//
// HTTP surface: JSON API under /api plus the web client fallback.

mod dtos;
pub mod middleware;
pub mod pomodoros;
pub mod spa;
pub mod tasks;

pub use dtos::*;

use crate::db::Database;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: Database, static_dir: PathBuf) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            static_dir,
        }
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/pomodoros", post(pomodoros::create_pomodoro))
        .route("/pomodoros/daily", get(pomodoros::get_daily_stats))
        .route("/pomodoros/task/{task_id}", get(pomodoros::get_pomodoros_by_task))
        .method_not_allowed_fallback(spa::api_not_found)
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(spa::fallback)
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(state)
}
