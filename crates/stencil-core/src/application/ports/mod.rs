//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `TemplateRenderer`: skeleton generation
//!   - `ManifestLoader`: project manifest parsing
//!   - `ClassResolver`: dependency loading and class lookup
//!   - `EntryInvoker`: starting the entry class
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ClassResolver, EntryInvoker, Filesystem, ManifestLoader, TemplateRenderer};
