// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can log and still return them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Template argument is missing")]
    MissingTemplate,

    #[error("The template '{template}' does not exist")]
    UnknownTemplate { template: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Couldn't find the class {class} in {workspace}")]
    EntryClassNotFound { class: String, workspace: PathBuf },

    #[error("Couldn't find the {method} method to run, ensure it exists in the class {class}")]
    EntryMethodNotFound { class: String, method: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTemplate => vec![
                "Pass a template name: stencil scaffold <class|controller|entity>".into(),
                "List available templates: stencil list".into(),
            ],
            Self::UnknownTemplate { template } => vec![
                format!("'{}' is not a known template", template),
                "Available templates:".into(),
                "  • class       - Simple class".into(),
                "  • controller  - Controller class".into(),
                "  • entity      - Entity class".into(),
            ],
            Self::EntryClassNotFound { class, workspace } => vec![
                format!("No source declares the class {}", class),
                format!(
                    "Declare [properties] namespace and entrypoint in {}/project.toml",
                    workspace.display()
                ),
                "Or point at another project with --project <PATH>".into(),
            ],
            Self::EntryMethodNotFound { class, method } => vec![
                format!("Add a static {}() method to {}", method, class),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate | Self::UnknownTemplate { .. } => ErrorCategory::Validation,
            Self::EntryClassNotFound { .. } | Self::EntryMethodNotFound { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

/// Error category for domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_names_the_value() {
        let err = DomainError::UnknownTemplate {
            template: "widget".into(),
        };
        assert!(err.to_string().contains("widget"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn entry_errors_are_not_found() {
        let err = DomainError::EntryClassNotFound {
            class: "Blog\\App".into(),
            workspace: PathBuf::from("/srv/blog"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("Blog\\App"));

        let err = DomainError::EntryMethodNotFound {
            class: "Blog\\App".into(),
            method: "main",
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions()[0].contains("main()"));
    }
}
