pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
#[cfg(test)]
mod test_utils;
pub mod validation;

use crate::config::Config;
use crate::db::{migrations, Database};
use crate::routes::AppState;
use log::{error, info};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Error type for startup and serving failures
#[derive(Debug)]
pub enum InitError {
    DatabaseOpen(rusqlite::Error),
    Migration(rusqlite::Error),
    Bind(std::io::Error),
    Serve(std::io::Error),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::DatabaseOpen(e) => write!(f, "Failed to open database: {e}"),
            InitError::Migration(e) => write!(f, "Failed to run database migrations: {e}"),
            InitError::Bind(e) => write!(f, "Failed to bind listener: {e}"),
            InitError::Serve(e) => write!(f, "Server error: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

/// Open the store and bring its schema up to date.
pub fn open_database(config: &Config) -> Result<Database, InitError> {
    let db = Database::open(&config.db_path).map_err(InitError::DatabaseOpen)?;
    migrations::run(db.connection()).map_err(InitError::Migration)?;
    Ok(db)
}

/// Run the HTTP server until Ctrl-C or SIGTERM.
pub async fn run(config: Config) -> Result<(), InitError> {
    info!("Opening database at {}", config.db_path.display());
    let db = open_database(&config)?;

    if !config.static_dir.join(constants::INDEX_DOCUMENT).is_file() {
        log::warn!(
            "No {} in {}; client routes will return 404",
            constants::INDEX_DOCUMENT,
            config.static_dir.display()
        );
    }

    let app = routes::router(AppState::new(db, config.static_dir.clone()));

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await.map_err(InitError::Bind)?;
    let local_addr = listener.local_addr().map_err(InitError::Bind)?;
    info!("Server listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InitError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_database_creates_schema() {
        let dir = tempdir().unwrap();
        let config = Config {
            db_path: dir.path().join("pomodoro.db"),
            ..Config::default()
        };

        let db = open_database(&config).unwrap();
        let count: i32 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('tasks', 'pomodoros')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_open_database_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let config = Config {
            db_path: dir.path().join("missing").join("pomodoro.db"),
            ..Config::default()
        };

        assert!(matches!(open_database(&config), Err(InitError::DatabaseOpen(_))));
    }
}
