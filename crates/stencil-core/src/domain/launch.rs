//! Entry-point resolution rules for `stencil run`.

use std::path::PathBuf;

use super::{NAMESPACE_SEPARATOR, ProjectDescriptor, capitalize_segments};

/// Entry class used when the manifest does not declare one.
pub const DEFAULT_ENTRY_CLASS: &str = "Application\\Program";

/// Method every entry class must expose.
pub const ENTRY_METHOD: &str = "main";

/// Flag that switches the workspace and is never forwarded.
pub const PROJECT_FLAG: &str = "--project";

/// A class the resolver located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryClass {
    /// Name as declared in source.
    pub name: String,
    /// File declaring the class.
    pub source: PathBuf,
    has_entry_method: bool,
}

impl EntryClass {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>, has_entry_method: bool) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            has_entry_method,
        }
    }

    pub fn has_entry_method(&self) -> bool {
        self.has_entry_method
    }
}

/// Everything needed to start the program. Built right before invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub class_name: String,
    pub method: &'static str,
    pub args: Vec<String>,
    /// Workspace the program runs in.
    pub workspace: PathBuf,
    /// Source file of the entry class.
    pub source: PathBuf,
    /// Dependency files loaded before the entry, in manifest order.
    pub preload: Vec<PathBuf>,
}

/// Fully-qualified entry class: `namespace\entrypoint` when the manifest
/// declares both, `default` otherwise. Every segment is capitalized.
pub fn entry_class_name(descriptor: Option<&ProjectDescriptor>, default: &str) -> String {
    let raw = descriptor
        .and_then(|d| Some((d.namespace()?, d.entrypoint()?)))
        .map(|(ns, ep)| format!("{ns}{NAMESPACE_SEPARATOR}{ep}"))
        .unwrap_or_else(|| default.to_string());

    capitalize_segments(&raw, NAMESPACE_SEPARATOR)
}

/// Pull a `--project PATH` (or `--project=PATH`) override out of the
/// arguments destined for the launched program.
///
/// Only the first occurrence is consumed; the remaining arguments keep their
/// order. A trailing `--project` with no value is left in place.
pub fn split_project_override(args: Vec<String>) -> (Option<PathBuf>, Vec<String>) {
    let inline_prefix = format!("{PROJECT_FLAG}=");

    let position = args.iter().enumerate().find_map(|(i, arg)| {
        if arg == PROJECT_FLAG {
            args.get(i + 1)
                .filter(|value| !value.is_empty())
                .map(|value| (i, 2, PathBuf::from(value)))
        } else {
            arg.strip_prefix(&inline_prefix)
                .filter(|value| !value.is_empty())
                .map(|value| (i, 1, PathBuf::from(value)))
        }
    });

    match position {
        Some((index, width, path)) => {
            let mut args = args;
            args.drain(index..index + width);
            (Some(path), args)
        }
        None => (None, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyRef;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_entry_without_manifest() {
        assert_eq!(entry_class_name(None, DEFAULT_ENTRY_CLASS), "Application\\Program");
    }

    #[test]
    fn manifest_entry_is_capitalized() {
        let d = ProjectDescriptor::new(
            Some("blog".into()),
            Some("app".into()),
            vec![DependencyRef::new("vendor/init")],
        );
        assert_eq!(entry_class_name(Some(&d), DEFAULT_ENTRY_CLASS), "Blog\\App");
    }

    #[test]
    fn half_declared_manifest_uses_default() {
        let d = ProjectDescriptor::new(Some("Blog".into()), None, vec![]);
        assert_eq!(entry_class_name(Some(&d), "app\\main"), "App\\Main");
    }

    #[test]
    fn strips_project_flag_and_value() {
        let (project, rest) = split_project_override(strings(&["--project", "/x", "--flag"]));
        assert_eq!(project, Some(PathBuf::from("/x")));
        assert_eq!(rest, strings(&["--flag"]));
    }

    #[test]
    fn strips_inline_form_and_keeps_order() {
        let (project, rest) = split_project_override(strings(&["a", "--project=/x", "b", "c"]));
        assert_eq!(project, Some(PathBuf::from("/x")));
        assert_eq!(rest, strings(&["a", "b", "c"]));
    }

    #[test]
    fn dangling_flag_is_left_alone() {
        let (project, rest) = split_project_override(strings(&["a", "--project"]));
        assert_eq!(project, None);
        assert_eq!(rest, strings(&["a", "--project"]));
    }
}
