//! Core domain layer for Stencil.
//!
//! Pure rules with no I/O: how raw scaffold input becomes identifiers and
//! paths, which skeletons exist, what a project manifest means, and how the
//! entry class of a project is named and located.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable values**: descriptors and identities are built once
//!
pub mod error;
pub mod generated;
pub mod launch;
pub mod manifest;
pub mod namespace_map;
pub mod naming;
pub mod template_key;

pub use error::{DomainError, ErrorCategory};
pub use generated::{GeneratedFile, RenderContext};
pub use launch::{
    DEFAULT_ENTRY_CLASS, ENTRY_METHOD, EntryClass, LaunchTarget, PROJECT_FLAG, entry_class_name,
    split_project_override,
};
pub use manifest::{DependencyRef, ProjectDescriptor};
pub use namespace_map::NamespaceMap;
pub use naming::{
    NAMESPACE_SEPARATOR, NameResolver, ResolvedIdentity, capitalize_first, capitalize_segments,
};
pub use template_key::TemplateKey;

/// Extension of every generated and launched source file.
pub const SOURCE_EXTENSION: &str = "php";
