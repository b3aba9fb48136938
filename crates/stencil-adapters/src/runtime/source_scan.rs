//! Class resolution by scanning PHP sources.
//!
//! Declarations are read with a handful of line-anchored patterns rather than
//! a parser. That is enough for the files this tool generates and for the
//! usual one-class-per-file layout.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use stencil_core::{
    application::{ApplicationError, ports::ClassResolver},
    domain::{EntryClass, NAMESPACE_SEPARATOR, NamespaceMap, SOURCE_EXTENSION},
    error::StencilResult,
};
use tracing::{debug, trace};

static NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*namespace\s+\\?([A-Za-z_][A-Za-z0-9_\\]*)\s*[;{]").expect("valid regex")
});

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:(?:abstract|final|readonly)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("valid regex")
});

static MAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfunction\s+main\s*\(").expect("valid regex"));

/// A class declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredClass {
    /// Fully-qualified name.
    pub name: String,
    pub has_main: bool,
}

/// List the classes declared in `source`.
///
/// A class owns the text up to the next class declaration; `main` counts
/// when it appears in that span.
pub fn scan_declarations(source: &str) -> Vec<DeclaredClass> {
    let namespace = NAMESPACE_RE
        .captures(source)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end_matches(NAMESPACE_SEPARATOR));

    let starts: Vec<(usize, &str)> = CLASS_RE
        .captures_iter(source)
        .filter_map(|c| {
            let whole = c.get(0)?;
            Some((whole.start(), c.get(1)?.as_str()))
        })
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, (start, short))| {
            let end = starts.get(i + 1).map_or(source.len(), |(next, _)| *next);
            let name = match namespace {
                Some(ns) if !ns.is_empty() => format!("{ns}{NAMESPACE_SEPARATOR}{short}"),
                _ => (*short).to_string(),
            };
            DeclaredClass {
                name,
                has_main: MAIN_RE.is_match(&source[*start..end]),
            }
        })
        .collect()
}

/// Resolves entry classes from source files on disk.
///
/// Classes declared by included files are found first; anything else is
/// looked up at the path the namespace table gives for it.
#[derive(Debug, Clone)]
pub struct SourceClassResolver {
    extension: String,
    loaded: Vec<EntryClass>,
}

impl SourceClassResolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            loaded: Vec::new(),
        }
    }

    /// Classes made available by [`ClassResolver::include`].
    pub fn loaded(&self) -> &[EntryClass] {
        &self.loaded
    }

    fn find_in(path: &Path, source: &str, class_name: &str) -> Option<EntryClass> {
        scan_declarations(source)
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(class_name))
            .map(|c| EntryClass::new(c.name, path, c.has_main))
    }
}

impl Default for SourceClassResolver {
    fn default() -> Self {
        Self::new(SOURCE_EXTENSION)
    }
}

impl ClassResolver for SourceClassResolver {
    fn include(&mut self, path: &Path) -> StencilResult<()> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::DependencyLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        for declared in scan_declarations(&source) {
            trace!(class = %declared.name, path = %path.display(), "Class declared");
            self.loaded
                .push(EntryClass::new(declared.name, path, declared.has_main));
        }
        Ok(())
    }

    fn resolve(&self, namespaces: &NamespaceMap, class_name: &str) -> Option<EntryClass> {
        let class_name = class_name.trim_start_matches(NAMESPACE_SEPARATOR);

        if let Some(found) = self
            .loaded
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(class_name))
        {
            debug!(class = class_name, "Resolved from loaded dependency");
            return Some(found.clone());
        }

        let candidate = namespaces.locate(class_name, &self.extension)?;
        let source = match std::fs::read_to_string(&candidate) {
            Ok(source) => source,
            Err(e) => {
                debug!(path = %candidate.display(), error = %e, "Candidate not readable");
                return None;
            }
        };
        Self::find_in(&candidate, &source, class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r"<?php

namespace Blog;

final class App
{
    public static function main(array $args): int
    {
        return 0;
    }
}
";

    #[test]
    fn scans_namespaced_class_with_main() {
        let classes = scan_declarations(PROGRAM);
        assert_eq!(
            classes,
            [DeclaredClass {
                name: "Blog\\App".into(),
                has_main: true,
            }]
        );
    }

    #[test]
    fn main_belongs_to_the_enclosing_class() {
        let source = "<?php\nclass First {\n}\nclass Second {\n  static function MAIN() {}\n}\n";
        let classes = scan_declarations(source);
        assert_eq!(classes.len(), 2);
        assert!(!classes[0].has_main);
        assert!(classes[1].has_main);
        assert_eq!(classes[1].name, "Second");
    }

    #[test]
    fn domain_named_helpers_are_not_main() {
        let source = "<?php\nclass Tool {\n  function mainMenu() {}\n}\n";
        assert!(!scan_declarations(source)[0].has_main);
    }

    #[test]
    fn resolves_through_namespace_map() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("App.php"), PROGRAM).unwrap();

        let mut namespaces = NamespaceMap::new(dir.path());
        namespaces.map("Blog", dir.path());

        let resolver = SourceClassResolver::default();
        let entry = resolver.resolve(&namespaces, "blog\\app").unwrap();
        assert_eq!(entry.name, "Blog\\App");
        assert_eq!(entry.source, dir.path().join("App.php"));
        assert!(entry.has_entry_method());
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SourceClassResolver::default();
        assert!(
            resolver
                .resolve(&NamespaceMap::new(dir.path()), "Application\\Program")
                .is_none()
        );
    }

    #[test]
    fn empty_name_does_not_read_a_sibling_of_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("blog");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(dir.path().join("blog.php"), PROGRAM).unwrap();

        let resolver = SourceClassResolver::default();
        assert!(resolver.resolve(&NamespaceMap::new(&root), "").is_none());
    }

    #[test]
    fn included_classes_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("lib.php");
        std::fs::write(&lib, PROGRAM).unwrap();

        let mut resolver = SourceClassResolver::default();
        resolver.include(&lib).unwrap();
        assert_eq!(resolver.loaded().len(), 1);

        let entry = resolver
            .resolve(&NamespaceMap::new("/nowhere"), "Blog\\App")
            .unwrap();
        assert_eq!(entry.source, lib);
    }

    #[test]
    fn unreadable_include_is_a_dependency_error() {
        let mut resolver = SourceClassResolver::default();
        let err = resolver.include(Path::new("/no/such/file.php")).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.php"));
    }
}
