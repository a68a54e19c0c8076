// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the loader, aggregators and CLI.

use std::path::PathBuf;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("No qualifying trips for {0}")]
    EmptyInput(&'static str),

    #[error("Unsupported selector: {0}")]
    UnsupportedSelector(String),

    #[error("Failed to read trip log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    MalformedRecord,
    EmptyInput,
    UnsupportedSelector,
    Io,
    Internal,
}

impl AppError {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        AppError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Configuration(_) => ErrorKind::Configuration,
            AppError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            AppError::EmptyInput(_) => ErrorKind::EmptyInput,
            AppError::UnsupportedSelector(_) => ErrorKind::UnsupportedSelector,
            AppError::Io { .. } => ErrorKind::Io,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the interactive session must end after this error.
    ///
    /// Problems with one selection's data are reported and the user may
    /// pick another selection. Configuration, I/O and internal errors end
    /// the run.
    pub fn is_session_fatal(&self) -> bool {
        !matches!(
            self,
            AppError::MalformedRecord { .. }
                | AppError::EmptyInput(_)
                | AppError::UnsupportedSelector(_)
        )
    }
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, AppError>;
