//! Application configuration loaded from environment variables.

use crate::errors::{Result, TrackerError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path or URL of the SQLite database file
    pub database_url: String,
    /// Connection pool size
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load optional .env file (ignored if missing).
        let _ = dotenvy::dotenv();

        Ok(Config {
            database_url: env_var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./fundmatch.db".to_string()),
            max_connections: env_var("MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| TrackerError::Config("Invalid MAX_CONNECTIONS".to_string()))?,
        })
    }

    /// Config pointing at an in-memory database, as used by the test suites.
    pub fn in_memory() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            // A second connection would see its own empty in-memory database.
            max_connections: 1,
        }
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| TrackerError::Config(format!("Missing env var: {key}")))
}
