//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Allocation error: {0}")]
    Allocation(#[from] fundmatch::Error),

    #[error("Project {0} not found")]
    ProjectNotFound(i64),

    #[error("A project named '{0}' already exists")]
    DuplicateName(String),

    #[error("Project {0} is closed and cannot be edited")]
    ProjectClosed(i64),

    #[error("Target {requested} is below the {invested} already invested")]
    FullAmountBelowInvested { requested: i64, invested: i64 },

    #[error("Project {0} already received funds and cannot be deleted")]
    ProjectAlreadyFunded(i64),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
