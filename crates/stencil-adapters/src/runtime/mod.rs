//! Runtime adapters for `stencil run`: class resolution and invocation.

mod process;
mod registry;
mod source_scan;

pub use process::{DEFAULT_INTERPRETER, ProcessInvoker, bootstrap_script};
pub use registry::ClassRegistry;
pub use source_scan::{DeclaredClass, SourceClassResolver, scan_declarations};
