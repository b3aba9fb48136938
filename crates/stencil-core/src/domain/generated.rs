//! Rendered output of a template, and the variables used to render it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::ResolvedIdentity;

/// A source file produced by a template, written once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Variables available to a template skeleton.
///
/// | Variable     | Example                   |
/// |--------------|---------------------------|
/// | `NAMESPACE`  | `Application\Controllers` |
/// | `CLASS_NAME` | `User`                    |
///
/// Backed by a `BTreeMap` so substitution order, and therefore output, is
/// stable for identical input.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(identity: &ResolvedIdentity) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("NAMESPACE", identity.namespace.clone());
        variables.insert("CLASS_NAME", identity.class_name.clone());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder. Unknown placeholders are
    /// left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
