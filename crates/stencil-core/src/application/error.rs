//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! resolution rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The generated file could not be written.
    #[error("Failed to create class {class} at {path}: {reason}")]
    EmitFailed {
        class: String,
        path: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project manifest exists but could not be read or parsed.
    #[error("Unreadable manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// A dependency file could not be loaded.
    #[error("Failed to load dependency {path}: {reason}")]
    DependencyLoad { path: PathBuf, reason: String },

    /// The runtime that runs the entry class could not be started.
    #[error("Failed to start {program}: {reason}")]
    InvocationFailed { program: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmitFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Manifest { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "The manifest is optional; without it Application\\Program is launched".into(),
            ],
            Self::DependencyLoad { path, .. } => vec![
                format!("Check that {} is readable", path.display()),
            ],
            Self::InvocationFailed { program, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", program),
                "Or set launch.interpreter in your configuration".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmitFailed { .. }
            | Self::FilesystemError { .. }
            | Self::DependencyLoad { .. }
            | Self::InvocationFailed { .. } => ErrorCategory::Internal,
            Self::Manifest { .. } => ErrorCategory::Validation,
        }
    }
}
