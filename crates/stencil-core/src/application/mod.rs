//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, LaunchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or resolution rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    LaunchRequest, LaunchService, ScaffoldOutcome, ScaffoldRequest, ScaffoldService, TemplateInfo,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ClassResolver, EntryInvoker, Filesystem, ManifestLoader, TemplateRenderer};

pub use error::ApplicationError;
