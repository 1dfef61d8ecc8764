//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Remote directory
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch employees: server answered {status}")]
    Fetch { status: u16 },

    #[error("Invalid directory source: {0}")]
    InvalidSource(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Unknown department: {0}")]
    InvalidDepartment(String),

    #[error("Invalid performance range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Employee #{0} not found")]
    EmployeeNotFound(i64),

    #[error("Directory is not loaded")]
    DirectoryNotLoaded,

    // ---------------------------
    // Storage / config errors
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for failures of the remote directory fetch, which the user can retry.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::Fetch { .. } | AppError::InvalidSource(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
