//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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
    // Ledger persistence
    // ---------------------------
    #[error("Ledger persistence error: {0}")]
    Persistence(String),

    // ---------------------------
    // Shift transition errors
    // ---------------------------
    #[error("User {0} is already on duty")]
    AlreadyOnDuty(String),

    #[error("User {0} is not on duty")]
    NotOnDuty(String),

    // ---------------------------
    // Query errors
    // ---------------------------
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
