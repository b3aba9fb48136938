//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STENCIL_<SECTION>__<KEY>`
//! 3. `--config FILE` (must exist)
//! 4. `.stencil.toml` in the current directory
//! 5. Global `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use stencil_adapters::{MANIFEST_FILE, runtime::DEFAULT_INTERPRETER};
use stencil_core::domain::DEFAULT_ENTRY_CLASS;

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stencil.toml";

const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scaffold: ScaffoldConfig,
    pub launch: LaunchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// First namespace segment of every generated class.
    pub root_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Entry class when the manifest does not name one.
    pub default_entry: String,
    /// Manifest file name at the workspace root.
    pub manifest: String,
    /// Program that runs the entry class.
    pub interpreter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            root_namespace: "Application".into(),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            default_entry: DEFAULT_ENTRY_CLASS.into(),
            manifest: MANIFEST_FILE.into(),
            interpreter: DEFAULT_INTERPRETER.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering every source over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it is the
    /// only layer that must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            Self::config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Invalid built-in defaults")?);

        if let Some(global) = global {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder = builder.add_source(File::from(local).required(false));
        if let Some(explicit) = explicit {
            builder = builder.add_source(File::from(explicit).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// `None` when the platform has no home directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path `stencil init` writes to.
    pub fn init_path(local: bool) -> PathBuf {
        if local {
            return PathBuf::from(LOCAL_CONFIG_FILE);
        }
        Self::config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key such as `launch.interpreter`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "scaffold.root_namespace" => self.scaffold.root_namespace.clone(),
            "launch.default_entry" => self.launch.default_entry.clone(),
            "launch.manifest" => self.launch.manifest.clone(),
            "launch.interpreter" => self.launch.interpreter.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_conventions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scaffold.root_namespace, "Application");
        assert_eq!(cfg.launch.default_entry, "Application\\Program");
        assert_eq!(cfg.launch.manifest, "project.toml");
        assert_eq!(cfg.launch.interpreter, "php");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn absent_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(None, &dir.path().join(LOCAL_CONFIG_FILE), None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn explicit_file_overrides_local() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        let explicit = dir.path().join("custom.toml");
        std::fs::write(&local, "[scaffold]\nroot_namespace = \"Local\"\n").unwrap();
        std::fs::write(&explicit, "[launch]\ninterpreter = \"php8.3\"\n").unwrap();

        let cfg = AppConfig::load_from(None, &local, Some(&explicit)).unwrap();
        assert_eq!(cfg.scaffold.root_namespace, "Local");
        assert_eq!(cfg.launch.interpreter, "php8.3");
        assert_eq!(cfg.launch.manifest, "project.toml");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(
            None,
            &dir.path().join(LOCAL_CONFIG_FILE),
            Some(&dir.path().join("nope.toml")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("launch.interpreter").as_deref(), Some("php"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[launch]"));
        assert!(text.contains("interpreter = \"php\""));
    }
}
