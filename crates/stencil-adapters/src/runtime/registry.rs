//! Explicitly registered classes.

use std::path::{Path, PathBuf};

use stencil_core::{
    application::ports::ClassResolver,
    domain::{EntryClass, NAMESPACE_SEPARATOR, NamespaceMap},
    error::StencilResult,
};

/// Class resolver backed by a fixed table instead of source files.
///
/// Useful when the classes are known up front, such as embedding the launch
/// flow or exercising it in tests.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Vec<EntryClass>,
    included: Vec<PathBuf>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a class. Names compare without regard to ASCII case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        has_entry_method: bool,
    ) -> &mut Self {
        let class = EntryClass::new(name, source, has_entry_method);
        self.classes
            .retain(|existing| !existing.name.eq_ignore_ascii_case(&class.name));
        self.classes.push(class);
        self
    }

    /// Files passed to [`ClassResolver::include`], in call order.
    pub fn included(&self) -> &[PathBuf] {
        &self.included
    }
}

impl ClassResolver for ClassRegistry {
    fn include(&mut self, path: &Path) -> StencilResult<()> {
        self.included.push(path.to_path_buf());
        Ok(())
    }

    fn resolve(&self, _namespaces: &NamespaceMap, class_name: &str) -> Option<EntryClass> {
        let class_name = class_name.trim_start_matches(NAMESPACE_SEPARATOR);
        self.classes
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(class_name))
            .cloned()
    }
}
