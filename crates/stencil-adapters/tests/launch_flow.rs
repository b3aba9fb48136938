//! Launch service wired to the manifest loader and source resolver.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stencil_adapters::{ClassRegistry, LocalFilesystem, SourceClassResolver, TomlManifestLoader};
use stencil_core::{
    application::{LaunchRequest, LaunchService, ports::EntryInvoker},
    domain::{DEFAULT_ENTRY_CLASS, DomainError, LaunchTarget, NamespaceMap},
    error::{StencilError, StencilResult},
};

/// Records what it was asked to run instead of starting a process.
#[derive(Clone, Default)]
struct RecordingInvoker {
    calls: Arc<Mutex<Vec<LaunchTarget>>>,
}

impl RecordingInvoker {
    fn last(&self) -> LaunchTarget {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

impl EntryInvoker for RecordingInvoker {
    fn invoke(&self, target: &LaunchTarget, _namespaces: &NamespaceMap) -> StencilResult<i32> {
        self.calls.lock().unwrap().push(target.clone());
        Ok(7)
    }
}

const APP: &str = "<?php\nnamespace Blog;\n\nclass App\n{\n    public static function main(array $args) {}\n}\n";

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

fn service(invoker: &RecordingInvoker) -> LaunchService {
    LaunchService::new(
        Box::new(TomlManifestLoader::default()),
        Box::new(SourceClassResolver::default()),
        Box::new(invoker.clone()),
        Box::new(LocalFilesystem::new()),
        DEFAULT_ENTRY_CLASS,
    )
}

#[test]
fn manifest_project_is_launched_with_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "project.toml",
        r#"
        [properties]
        namespace = "blog"
        entrypoint = "app"

        [[dependencies.package]]
        include = "vendor/init.php"

        [[dependencies.package]]
        include = "vendor/missing.php"
        "#,
    );
    let init = write(dir.path(), "vendor/init.php", "<?php\n");
    write(dir.path(), "App.php", APP);

    let invoker = RecordingInvoker::default();
    let request = LaunchRequest::new(
        Some(dir.path().to_path_buf()),
        vec!["serve".into(), "--port=8080".into()],
        Path::new("/"),
    );
    let status = service(&invoker).run(&request).unwrap();

    assert_eq!(status, 7);
    let target = invoker.last();
    assert_eq!(target.class_name, "Blog\\App");
    assert_eq!(target.source, dir.path().join("App.php"));
    assert_eq!(target.preload, [init]);
    assert_eq!(target.args, ["serve", "--port=8080"]);
}

#[test]
fn default_entry_is_looked_up_under_the_workspace() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Application/Program.php",
        "<?php\nnamespace Application;\nclass Program { static function main($a) {} }\n",
    );

    let invoker = RecordingInvoker::default();
    let request = LaunchRequest::new(None, vec![], dir.path());
    service(&invoker).run(&request).unwrap();

    assert_eq!(invoker.last().class_name, "Application\\Program");
}

#[test]
fn empty_workspace_reports_missing_entry_class() {
    let dir = tempfile::tempdir().unwrap();
    let invoker = RecordingInvoker::default();

    let err = service(&invoker)
        .run(&LaunchRequest::new(None, vec![], dir.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        StencilError::Domain(DomainError::EntryClassNotFound { ref class, .. })
            if class == "Application\\Program"
    ));
    assert!(invoker.calls.lock().unwrap().is_empty());
}

#[test]
fn entry_without_main_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Application/Program.php",
        "<?php\nnamespace Application;\nclass Program { function run() {} }\n",
    );

    let err = service(&RecordingInvoker::default())
        .run(&LaunchRequest::new(None, vec![], dir.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        StencilError::Domain(DomainError::EntryMethodNotFound { .. })
    ));
}

#[test]
fn registry_drives_launch_without_sources() {
    let mut registry = ClassRegistry::new();
    registry.register("Blog\\App", "/virtual/App.php", true);

    let invoker = RecordingInvoker::default();
    let mut service = LaunchService::new(
        Box::new(TomlManifestLoader::default()),
        Box::new(registry),
        Box::new(invoker.clone()),
        Box::new(LocalFilesystem::new()),
        "blog\\app",
    );

    let dir = tempfile::tempdir().unwrap();
    let request = LaunchRequest::new(None, vec!["--project".into()], dir.path());
    service.run(&request).unwrap();

    let target = invoker.last();
    assert_eq!(target.source, PathBuf::from("/virtual/App.php"));
    assert_eq!(target.args, ["--project"]);
}

#[test]
fn dependencies_outside_the_workspace_are_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    let outside = write(other.path(), "outside.php", "<?php\n");
    write(
        dir.path(),
        "project.toml",
        &format!(
            "[properties]\nnamespace = \"Blog\"\nentrypoint = \"App\"\n\n\
             [[dependencies.package]]\ninclude = '{}'\n\n\
             [[dependencies.package]]\ninclude = '../outside.php'\n",
            outside.display()
        ),
    );
    write(dir.path(), "App.php", APP);

    let invoker = RecordingInvoker::default();
    service(&invoker)
        .run(&LaunchRequest::new(None, vec![], dir.path()))
        .unwrap();

    let target = invoker.last();
    assert!(target.preload.iter().all(|p| p.starts_with(dir.path())));
    assert!(target.preload.is_empty());
}

#[test]
fn empty_default_entry_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let invoker = RecordingInvoker::default();
    let mut service = LaunchService::new(
        Box::new(TomlManifestLoader::default()),
        Box::new(SourceClassResolver::default()),
        Box::new(invoker.clone()),
        Box::new(LocalFilesystem::new()),
        "",
    );

    let err = service
        .run(&LaunchRequest::new(None, vec![], dir.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        StencilError::Domain(DomainError::EntryClassNotFound { .. })
    ));
    assert!(invoker.calls.lock().unwrap().is_empty());
}
