//! Namespace prefix to directory table used for class lookup.
//!
//! One map is created per launch, seeded with the workspace root as the
//! fallback location, and handed to the launch service by `&mut`. Prefixes
//! are matched on whole segments and ignore ASCII case, like class names do
//! at runtime.

use std::path::{Path, PathBuf};

use super::NAMESPACE_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    root: PathBuf,
    mappings: Vec<(String, PathBuf)>,
}

impl NamespaceMap {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mappings: Vec::new(),
        }
    }

    /// Directory used for names no mapping covers.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register `prefix → directory`, replacing an earlier mapping of the
    /// same prefix.
    pub fn map(&mut self, prefix: impl Into<String>, directory: impl Into<PathBuf>) {
        let prefix = prefix.into().trim_matches(NAMESPACE_SEPARATOR).to_string();
        let directory = directory.into();
        match self
            .mappings
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&prefix))
        {
            Some(entry) => entry.1 = directory,
            None => self.mappings.push((prefix, directory)),
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&Path> {
        self.mappings
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(prefix))
            .map(|(_, dir)| dir.as_path())
    }

    /// Mappings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.mappings
            .iter()
            .map(|(prefix, dir)| (prefix.as_str(), dir.as_path()))
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Candidate source file for `class_name`.
    ///
    /// The longest mapped prefix wins and the remaining segments become the
    /// relative path. Without a matching prefix every segment is a path
    /// component under the root. `None` for a name with no segments.
    pub fn locate(&self, class_name: &str, extension: &str) -> Option<PathBuf> {
        let segments: Vec<&str> = class_name
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            return None;
        }

        let (base, rest) = self
            .mappings
            .iter()
            .filter_map(|(prefix, dir)| {
                let prefix_segments: Vec<&str> = prefix.split(NAMESPACE_SEPARATOR).collect();
                let matches = prefix_segments.len() < segments.len()
                    && prefix_segments
                        .iter()
                        .zip(&segments)
                        .all(|(a, b)| a.eq_ignore_ascii_case(b));
                matches.then_some((dir.as_path(), prefix_segments.len()))
            })
            .max_by_key(|(_, depth)| *depth)
            .map(|(dir, depth)| (dir, &segments[depth..]))
            .unwrap_or((self.root.as_path(), &segments[..]));

        let mut path = rest.iter().fold(base.to_path_buf(), |p, s| p.join(s));
        path.set_extension(extension);
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_names_fall_back_to_root() {
        let map = NamespaceMap::new("/srv/app");
        assert_eq!(
            map.locate("Application\\Program", "php"),
            Some(PathBuf::from("/srv/app/Application/Program.php"))
        );
    }

    #[test]
    fn mapped_prefix_strips_namespace() {
        let mut map = NamespaceMap::new("/srv/blog");
        map.map("Blog", "/srv/blog");
        assert_eq!(
            map.locate("Blog\\App", "php"),
            Some(PathBuf::from("/srv/blog/App.php"))
        );
        assert_eq!(
            map.locate("Blog\\Controllers\\Home", "php"),
            Some(PathBuf::from("/srv/blog/Controllers/Home.php"))
        );
    }

    #[test]
    fn prefix_match_ignores_case_and_prefers_longest() {
        let mut map = NamespaceMap::new("/root");
        map.map("blog", "/a");
        map.map("Blog\\Admin", "/b");
        assert_eq!(map.locate("Blog\\Admin\\Panel", "php"), Some(PathBuf::from("/b/Panel.php")));
        assert_eq!(map.locate("Blog\\Home", "php"), Some(PathBuf::from("/a/Home.php")));
    }

    #[test]
    fn prefix_must_align_on_segments() {
        let mut map = NamespaceMap::new("/root");
        map.map("Blog", "/a");
        assert_eq!(
            map.locate("Blogger\\App", "php"),
            Some(PathBuf::from("/root/Blogger/App.php"))
        );
    }

    #[test]
    fn empty_name_locates_nothing() {
        let map = NamespaceMap::new("/srv/blog");
        assert_eq!(map.locate("", "php"), None);
        assert_eq!(map.locate("\\\\", "php"), None);
    }

    #[test]
    fn remapping_replaces_directory() {
        let mut map = NamespaceMap::new("/root");
        map.map("Blog", "/a");
        map.map("BLOG\\", "/b");
        assert_eq!(map.iter().count(), 1);
        assert_eq!(map.get("blog"), Some(Path::new("/b")));
    }
}
