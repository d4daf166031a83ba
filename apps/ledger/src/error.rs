//! # Host Error Type
//!
//! Unified error type for the `discstore` binary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Host                               │
//! │                                                                         │
//! │  ledger.toml ──── io / toml errors ───────────┐                         │
//! │                                               │                         │
//! │  argv ─────────── clap::Error ────────────────┼──► AppError ──► stderr  │
//! │                                               │         │               │
//! │  MusicStore ───── LedgerError ────────────────┘         ▼               │
//! │                                             clap's code, else 1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use discstore_core::{LedgerError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the host application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The command line could not be understood, or help was requested.
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `LedgerConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but breaks a rule.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Input rejected before reaching the ledger.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The ledger refused the operation.
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code: clap's own code for command-line errors
    /// (2 for usage, 0 for help), 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Cli(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
