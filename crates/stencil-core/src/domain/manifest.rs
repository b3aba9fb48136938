use std::path::{Component, Path, PathBuf};

/// A dependency file to load before the entry class is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    /// Relative to the workspace root.
    pub include_path: PathBuf,
}

impl DependencyRef {
    pub fn new(include_path: impl Into<PathBuf>) -> Self {
        Self {
            include_path: include_path.into(),
        }
    }

    /// Path of the dependency under `workspace`.
    ///
    /// Leading root or drive components are dropped so the include always
    /// lands inside the workspace. `None` when the path walks out of it
    /// through `..`.
    pub fn resolve_in(&self, workspace: &Path) -> Option<PathBuf> {
        let mut path = workspace.to_path_buf();
        for component in self.include_path.components() {
            match component {
                Component::Normal(segment) => path.push(segment),
                Component::ParentDir => return None,
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }
        Some(path)
    }
}

/// Parsed project manifest. Built once per launch and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    entry: Option<(String, String)>,
    dependencies: Vec<DependencyRef>,
}

impl ProjectDescriptor {
    /// Namespace and entry point are kept only when both are present and
    /// non-empty; a half-declared entry is dropped entirely.
    pub fn new(
        namespace: Option<String>,
        entrypoint: Option<String>,
        dependencies: Vec<DependencyRef>,
    ) -> Self {
        let entry = match (namespace, entrypoint) {
            (Some(ns), Some(ep)) if !ns.is_empty() && !ep.is_empty() => Some((ns, ep)),
            _ => None,
        };
        Self {
            entry,
            dependencies,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.entry.as_ref().map(|(ns, _)| ns.as_str())
    }

    pub fn entrypoint(&self) -> Option<&str> {
        self.entry.as_ref().map(|(_, ep)| ep.as_str())
    }

    /// In manifest order.
    pub fn dependencies(&self) -> &[DependencyRef] {
        &self.dependencies
    }
}
