//! Scaffold Service - generates one source file from a built-in template.
//!
//! The workflow is a straight line:
//! 1. Validate that a template was given
//! 2. Select the template key
//! 3. Generate: resolve names, render the skeleton
//! 4. Emit the file
//!
//! Every failure is terminal; nothing is retried and nothing is left pending.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{DomainError, GeneratedFile, NameResolver, ResolvedIdentity, TemplateKey},
    error::{StencilError, StencilResult},
};

/// Raw scaffold input as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub template: Option<String>,
    pub name: Option<String>,
    pub directory: Option<String>,
}

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub template: TemplateKey,
    pub identity: ResolvedIdentity,
    pub path: PathBuf,
}

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: TemplateKey,
    pub description: &'static str,
    pub default_directory: &'static str,
    pub default_class: &'static str,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    namespace_root: String,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// `namespace_root` prefixes every generated namespace (`Application`
    /// by default).
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        namespace_root: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            namespace_root: namespace_root.into(),
        }
    }

    /// Scaffold a class into `cwd`.
    #[instrument(
        skip_all,
        fields(
            template = request.template.as_deref().unwrap_or(""),
            cwd = %cwd.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest, cwd: &Path) -> StencilResult<ScaffoldOutcome> {
        // 1. Validate
        let raw = request
            .template
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::MissingTemplate)?;

        // 2. Select
        let key: TemplateKey = raw.parse()?;
        debug!(%key, "Template selected");

        // 3. Generate
        let identity = NameResolver::new(&self.namespace_root, cwd).resolve(
            request.directory.as_deref(),
            request.name.as_deref(),
            key.default_sub_path(),
            key.default_class_name(),
        );
        debug!(
            namespace = %identity.namespace,
            class = %identity.class_name,
            destination = %identity.destination_dir.display(),
            "Identity resolved"
        );
        let file = self.renderer.render(key, &identity);

        // 4. Emit
        let path = file.path.clone();
        self.emit(file)
            .map_err(|reason| ApplicationError::EmitFailed {
                class: identity.class_name.clone(),
                path: path.clone(),
                reason,
            })?;

        info!(path = %path.display(), "Class written");
        Ok(ScaffoldOutcome {
            template: key,
            identity,
            path,
        })
    }

    /// Built-in templates with their defaults.
    pub fn list_templates() -> Vec<TemplateInfo> {
        TemplateKey::ALL
            .into_iter()
            .map(|key| TemplateInfo {
                name: key,
                description: key.description(),
                default_directory: key.default_sub_path(),
                default_class: key.default_class_name(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create the parent chain and write the file. Not atomic.
    fn emit(&self, file: GeneratedFile) -> Result<(), String> {
        if let Some(parent) = file.path.parent() {
            if !self.filesystem.exists(parent) {
                self.filesystem
                    .create_dir_all(parent)
                    .map_err(|e| reason_of(&e))?;
            }
        }
        self.filesystem
            .write_file(&file.path, &file.content)
            .map_err(|e| reason_of(&e))
    }
}

fn reason_of(err: &StencilError) -> String {
    match err {
        StencilError::Application(ApplicationError::FilesystemError { reason, .. }) => {
            reason.clone()
        }
        other => other.to_string(),
    }
}
