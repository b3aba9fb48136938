//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{
    EntryClass, GeneratedFile, LaunchTarget, NamespaceMap, ProjectDescriptor, ResolvedIdentity,
    TemplateKey,
};
use crate::error::StencilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing any existing file.
    ///
    /// Fails unless at least one byte was written and the file was flushed.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for skeleton generation.
///
/// Output must be a pure function of `key` and `identity`.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, key: TemplateKey, identity: &ResolvedIdentity) -> GeneratedFile;
}

/// Port for reading the project manifest of a workspace.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestLoader {
    /// `Ok(None)` when the workspace has no manifest.
    fn load(&self, workspace: &Path) -> StencilResult<Option<ProjectDescriptor>>;
}

/// Port for loading dependency files and looking classes up.
#[cfg_attr(test, mockall::automock)]
pub trait ClassResolver {
    /// Load a dependency file so the classes it declares become resolvable.
    fn include(&mut self, path: &Path) -> StencilResult<()>;

    /// Locate `class_name`, consulting `namespaces` for where to look.
    fn resolve(&self, namespaces: &NamespaceMap, class_name: &str) -> Option<EntryClass>;
}

/// Port for running the entry method of a resolved class.
#[cfg_attr(test, mockall::automock)]
pub trait EntryInvoker {
    /// Returns the exit status of the launched program.
    fn invoke(&self, target: &LaunchTarget, namespaces: &NamespaceMap) -> StencilResult<i32>;
}
