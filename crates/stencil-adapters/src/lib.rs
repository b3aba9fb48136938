//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;
pub mod renderer;
pub mod runtime;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::{MANIFEST_FILE, TomlManifestLoader};
pub use renderer::BuiltinRenderer;
pub use runtime::{ClassRegistry, ProcessInvoker, SourceClassResolver};
