//! Name and namespace normalization.
//!
//! Turns the loose `--name` / `--directory` input of the scaffold command
//! into a [`ResolvedIdentity`]: a canonical namespace, a class name and the
//! directory the generated file lands in.
//!
//! The namespace is capitalized segment by segment while the destination
//! directory keeps the raw casing the user typed. `stencil scaffold class
//! -d models/user` declares `Application\Models\User` but writes under
//! `./models/user`. The two are allowed to diverge.

use std::path::PathBuf;

/// Separator between namespace segments in generated and launched sources.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Canonical identifiers for one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// `\`-joined capitalized segments, never ending in a separator.
    pub namespace: String,
    /// Non-empty, first character upper-cased.
    pub class_name: String,
    /// Absolute directory under the working directory.
    pub destination_dir: PathBuf,
}

impl ResolvedIdentity {
    /// Fully-qualified class name, e.g. `Application\Controllers\User`.
    pub fn qualified_name(&self) -> String {
        format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.class_name)
    }
}

/// Resolves raw scaffold input against a root namespace and working directory.
#[derive(Debug, Clone)]
pub struct NameResolver {
    namespace_root: String,
    cwd: PathBuf,
}

impl NameResolver {
    pub fn new(namespace_root: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
            cwd: cwd.into(),
        }
    }

    /// Resolve the identity of a class to generate.
    ///
    /// Absent or empty `sub_path` / `class_name` fall back to the template
    /// defaults, so this never fails.
    pub fn resolve(
        &self,
        sub_path: Option<&str>,
        class_name: Option<&str>,
        default_sub_path: &str,
        default_class_name: &str,
    ) -> ResolvedIdentity {
        let sub_path = sub_path.unwrap_or(default_sub_path);
        let sub_path = sub_path.trim_start_matches(['/', NAMESPACE_SEPARATOR]);

        let class_name = class_name
            .filter(|name| !name.is_empty())
            .unwrap_or(default_class_name);

        ResolvedIdentity {
            namespace: self.namespace_for(sub_path),
            class_name: capitalize_first(class_name),
            destination_dir: self.destination_for(sub_path),
        }
    }

    fn namespace_for(&self, sub_path: &str) -> String {
        let sub_path = sub_path.replace('/', &NAMESPACE_SEPARATOR.to_string());
        let joined = format!("{}{}{}", self.namespace_root, NAMESPACE_SEPARATOR, sub_path);
        let trimmed = joined.trim_end_matches(NAMESPACE_SEPARATOR);

        capitalize_segments(trimmed, NAMESPACE_SEPARATOR)
    }

    fn destination_for(&self, sub_path: &str) -> PathBuf {
        if sub_path.is_empty() {
            return self.cwd.clone();
        }
        sub_path
            .split(['/', NAMESPACE_SEPARATOR])
            .filter(|segment| !segment.is_empty())
            .fold(self.cwd.clone(), |dir, segment| dir.join(segment))
    }
}

/// Upper-case the first character if it is ASCII, leaving the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase()).chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize every `separator`-delimited segment independently.
///
/// Empty segments are preserved, interior casing is not touched.
pub fn capitalize_segments(value: &str, separator: char) -> String {
    value
        .split(separator)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}
