//! Runtime configuration
//!
//! Read from the process environment after an optional `.env` file has been
//! loaded by the binary.

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use std::path::PathBuf;

pub const PORT_VAR: &str = "PORT";
pub const DB_PATH_VAR: &str = "POMODORO_DB_PATH";
pub const STATIC_DIR_VAR: &str = "POMODORO_STATIC_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listening port; the server binds all interfaces.
    pub port: u16,
    pub db_path: PathBuf,
    /// Directory holding the built web client.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(PORT_VAR) {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?;
        }
        if let Some(value) = get(DB_PATH_VAR) {
            config.db_path = PathBuf::from(value);
        }
        if let Some(value) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("pomodoro.db"));
        assert_eq!(config.static_dir, PathBuf::from("./static/browser"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("POMODORO_DB_PATH", "/var/lib/pomodoro/data.db"),
            ("POMODORO_STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("/var/lib/pomodoro/data.db"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = Config::from_lookup(lookup(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }
}
