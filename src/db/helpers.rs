// src/db/helpers.rs

use crate::db::Database;
use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Execute a database operation on the blocking pool with proper lock
/// handling and error mapping.
///
/// Store failures are logged with the operation name and surface as
/// [`AppError::Database`].
///
/// # Example
/// ```ignore
/// with_connection(&db, "load tasks", Task::find_all).await
/// ```
pub async fn with_connection<F, T>(
    db: &Arc<Mutex<Database>>,
    operation: &'static str,
    f: F,
) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db = Arc::clone(db);

    tokio::task::spawn_blocking(move || {
        let db = db.lock().map_err(|e| {
            log::error!("Failed to acquire database lock to {operation}: {e}");
            AppError::LockPoisoned
        })?;

        f(db.connection()).map_err(|e| {
            log::error!("Failed to {operation}: {e}");
            AppError::Database(e)
        })
    })
    .await
    .map_err(|e| {
        log::error!("Database task to {operation} did not complete: {e}");
        AppError::Internal(format!("Failed to {operation}"))
    })?
}
