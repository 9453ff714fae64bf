//! Crate-level error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that escape the audit pipeline.
///
/// Unreadable files and unresolvable paths are recovered locally during the
/// scan and never show up here.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("no route declarations detected")]
    NoRoutes,

    #[error("invalid repository path: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
