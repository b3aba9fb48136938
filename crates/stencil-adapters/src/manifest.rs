//! `project.toml` manifest loader.
//!
//! ```toml
//! [properties]
//! namespace = "Blog"
//! entrypoint = "App"
//!
//! [[dependencies.package]]
//! include = "vendor/init.php"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stencil_core::{
    application::{ApplicationError, ports::ManifestLoader},
    domain::{DependencyRef, ProjectDescriptor},
    error::StencilResult,
};
use tracing::{debug, instrument, warn};

/// Default manifest file name at the workspace root.
pub const MANIFEST_FILE: &str = "project.toml";

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    properties: RawProperties,
    #[serde(default)]
    dependencies: RawDependencies,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    namespace: Option<String>,
    entrypoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDependencies {
    #[serde(default)]
    package: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    include: Option<String>,
}

/// Reads the manifest from `<workspace>/<file_name>`.
#[derive(Debug, Clone)]
pub struct TomlManifestLoader {
    file_name: String,
}

impl TomlManifestLoader {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn manifest_path(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.file_name)
    }
}

impl Default for TomlManifestLoader {
    fn default() -> Self {
        Self::new(MANIFEST_FILE)
    }
}

impl ManifestLoader for TomlManifestLoader {
    #[instrument(skip(self), fields(workspace = %workspace.display()))]
    fn load(&self, workspace: &Path) -> StencilResult<Option<ProjectDescriptor>> {
        let path = self.manifest_path(workspace);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No manifest");
                return Ok(None);
            }
            Err(e) => {
                return Err(ApplicationError::Manifest {
                    path,
                    reason: e.to_string(),
                }
                .into());
            }
        };

        parse_manifest(&content)
            .map(Some)
            .map_err(|reason| ApplicationError::Manifest { path, reason }.into())
    }
}

/// Parse manifest text into a descriptor.
pub fn parse_manifest(content: &str) -> Result<ProjectDescriptor, String> {
    let raw: RawManifest = toml::from_str(content).map_err(|e| e.to_string())?;

    let dependencies = raw
        .dependencies
        .package
        .into_iter()
        .enumerate()
        .filter_map(|(index, package)| match package.include {
            Some(include) if !include.trim().is_empty() => Some(DependencyRef::new(include)),
            _ => {
                warn!(index, "Package entry without include, skipping");
                None
            }
        })
        .collect();

    Ok(ProjectDescriptor::new(
        raw.properties.namespace,
        raw.properties.entrypoint,
        dependencies,
    ))
}
