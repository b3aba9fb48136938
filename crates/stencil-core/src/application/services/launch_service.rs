//! Launch Service - resolves and starts a project's entry point.
//!
//! States, in order:
//! 1. ResolveWorkspace (see [`LaunchRequest::new`])
//! 2. LoadManifest      - optional; any failure falls back to defaults
//! 3. MapNamespace      - manifest namespace → workspace root
//! 4. LoadDependencies  - manifest order, missing files skipped
//! 5. ResolveEntry      - class must exist and expose `main`
//! 6. Invoke            - hand over to the program

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ClassResolver, EntryInvoker, Filesystem, ManifestLoader},
    domain::{
        DomainError, ENTRY_METHOD, LaunchTarget, NamespaceMap, ProjectDescriptor,
        entry_class_name, split_project_override,
    },
    error::StencilResult,
};

/// Workspace and forwarded arguments of one `run` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub workspace: PathBuf,
    pub args: Vec<String>,
}

impl LaunchRequest {
    /// Resolve the workspace: an explicit `project` wins, then a
    /// `--project` found in `cli_args`, then `cwd`. Relative projects are
    /// taken relative to `cwd`. Any `--project` pair is removed from the
    /// forwarded arguments.
    pub fn new(project: Option<PathBuf>, cli_args: Vec<String>, cwd: &Path) -> Self {
        let (inline, args) = split_project_override(cli_args);
        let workspace = project
            .or(inline)
            .map(|p| cwd.join(p))
            .unwrap_or_else(|| cwd.to_path_buf());
        Self { workspace, args }
    }
}

/// Entry-point launcher.
pub struct LaunchService {
    manifests: Box<dyn ManifestLoader>,
    resolver: Box<dyn ClassResolver>,
    invoker: Box<dyn EntryInvoker>,
    filesystem: Box<dyn Filesystem>,
    default_entry: String,
}

impl LaunchService {
    pub fn new(
        manifests: Box<dyn ManifestLoader>,
        resolver: Box<dyn ClassResolver>,
        invoker: Box<dyn EntryInvoker>,
        filesystem: Box<dyn Filesystem>,
        default_entry: impl Into<String>,
    ) -> Self {
        Self {
            manifests,
            resolver,
            invoker,
            filesystem,
            default_entry: default_entry.into(),
        }
    }

    /// Launch with a fresh namespace table rooted at the workspace.
    pub fn run(&mut self, request: &LaunchRequest) -> StencilResult<i32> {
        let mut namespaces = NamespaceMap::new(&request.workspace);
        self.launch(request, &mut namespaces)
    }

    /// Launch using the given namespace table.
    ///
    /// Returns the exit status of the launched program.
    #[instrument(skip_all, fields(workspace = %request.workspace.display()))]
    pub fn launch(
        &mut self,
        request: &LaunchRequest,
        namespaces: &mut NamespaceMap,
    ) -> StencilResult<i32> {
        let workspace = request.workspace.as_path();

        // 2. LoadManifest
        let descriptor = self.load_manifest(workspace);

        // 3. MapNamespace
        if let Some(namespace) = descriptor.as_ref().and_then(ProjectDescriptor::namespace) {
            debug!(namespace, "Mapping namespace to workspace root");
            namespaces.map(namespace, workspace);
        }

        // 4. LoadDependencies
        let mut preload = Vec::new();
        if let Some(descriptor) = &descriptor {
            for dependency in descriptor.dependencies() {
                let Some(path) = dependency.resolve_in(workspace) else {
                    warn!(
                        include = %dependency.include_path.display(),
                        "Dependency escapes the workspace, skipping"
                    );
                    continue;
                };
                if !self.filesystem.exists(&path) {
                    debug!(path = %path.display(), "Dependency not found, skipping");
                    continue;
                }
                self.resolver.include(&path)?;
                debug!(path = %path.display(), "Dependency loaded");
                preload.push(path);
            }
        }

        // 5. ResolveEntry
        let class_name = entry_class_name(descriptor.as_ref(), &self.default_entry);
        let entry = self
            .resolver
            .resolve(namespaces, &class_name)
            .ok_or_else(|| DomainError::EntryClassNotFound {
                class: class_name.clone(),
                workspace: workspace.to_path_buf(),
            })?;

        if !entry.has_entry_method() {
            return Err(DomainError::EntryMethodNotFound {
                class: class_name,
                method: ENTRY_METHOD,
            }
            .into());
        }

        // 6. Invoke
        let target = LaunchTarget {
            class_name,
            method: ENTRY_METHOD,
            args: request.args.clone(),
            workspace: workspace.to_path_buf(),
            source: entry.source,
            preload,
        };
        info!(class = %target.class_name, args = target.args.len(), "Invoking entry point");
        self.invoker.invoke(&target, namespaces)
    }

    fn load_manifest(&self, workspace: &Path) -> Option<ProjectDescriptor> {
        match self.manifests.load(workspace) {
            Ok(Some(descriptor)) => Some(descriptor),
            Ok(None) => {
                debug!("No manifest, using defaults");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable manifest, using defaults");
                None
            }
        }
    }
}
