//! Unified application error type.
//! All modules (api, db, core, cli, utils) return AppError so that every
//! failure ends up as a single user-facing message.

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
    // Local storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Network / backend
    // ---------------------------
    #[error("Connection error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection error: server unreachable ({0})")]
    Unreachable(String),

    #[error("Session expired ({0})")]
    Unauthorized(u16),

    #[error("Access denied ({0})")]
    Forbidden(u16),

    #[error("Endpoint not found ({0})")]
    EndpointNotFound(u16),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse server response: {0}")]
    Parse(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("User not authenticated or invalid token")]
    NotAuthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    AuthFailed(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Empty QR code")]
    EmptyQr,

    #[error("Invalid QR code: expected {expected} fields, found {found}")]
    InvalidQr { expected: usize, found: usize },

    #[error("Employee does not belong to this project (QR project {scanned}, open project {open})")]
    ProjectMismatch { scanned: String, open: String },

    #[error("Invalid attendance type: {0}")]
    InvalidAttendanceType(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    MissingData(String),

    #[error("{0}")]
    Registration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Serialization / export
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
