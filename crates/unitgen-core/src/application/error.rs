//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the domain.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while placing a unit file on disk.
///
/// Both variants are terminal: nothing is retried and nothing is rolled
/// back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Writing the unit into the staging directory failed.
    #[error("Failed to write service file {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// Renaming the staged unit into its destination failed.
    #[error("Failed to move service file {from} to {to}: {reason}")]
    MoveError {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WriteError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Ensure the staging directory (--tmp) exists".into(),
                "Check that you have write permissions".into(),
            ],
            Self::MoveError { from, to, .. } => vec![
                format!("The staged file was left at: {}", from.display()),
                format!(
                    "Ensure the destination directory exists: {}",
                    to.parent().unwrap_or(to).display()
                ),
                "Staging and destination must be on the same filesystem".into(),
                "Installing into /etc/systemd/system usually requires root".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WriteError { .. } | Self::MoveError { .. } => ErrorCategory::Filesystem,
        }
    }
}
