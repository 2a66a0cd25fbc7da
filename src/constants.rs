// src/constants.rs

/// Work minutes recorded when a pomodoro omits its work duration
pub const DEFAULT_WORK_MINUTES: i32 = 25;

/// Rest minutes recorded when a pomodoro omits its rest duration
pub const DEFAULT_REST_MINUTES: i32 = 5;

/// Number of most recent days returned by the daily statistics query
pub const DAILY_STATS_LIMIT: i64 = 30;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Database file used when `POMODORO_DB_PATH` is not set
pub const DEFAULT_DB_PATH: &str = "pomodoro.db";

/// Web client build directory used when `POMODORO_STATIC_DIR` is not set
pub const DEFAULT_STATIC_DIR: &str = "./static/browser";

/// Document served for client-side routes
pub const INDEX_DOCUMENT: &str = "index.html";
