//! Implementation of the `stencil scaffold` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call the
//! core scaffold service, and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use stencil_adapters::{BuiltinRenderer, LocalFilesystem};
use stencil_core::application::{ScaffoldOutcome, ScaffoldRequest, ScaffoldService};

use crate::{
    cli::{OutputFormat, ScaffoldArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// JSON shape of a successful scaffold.
#[derive(Debug, Serialize)]
struct ScaffoldReport<'a> {
    template: &'a str,
    namespace: &'a str,
    class: &'a str,
    path: &'a PathBuf,
}

impl<'a> From<&'a ScaffoldOutcome> for ScaffoldReport<'a> {
    fn from(outcome: &'a ScaffoldOutcome) -> Self {
        Self {
            template: outcome.template.as_str(),
            namespace: &outcome.identity.namespace,
            class: &outcome.identity.class_name,
            path: &outcome.path,
        }
    }
}

/// Execute the `stencil scaffold` command.
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;

    let request = ScaffoldRequest {
        template: args.template,
        name: args.name,
        directory: args.directory,
    };
    debug!(?request, root = %config.scaffold.root_namespace, "Scaffold requested");

    let service = ScaffoldService::new(
        Box::new(BuiltinRenderer::new()),
        Box::new(LocalFilesystem::new()),
        config.scaffold.root_namespace,
    );
    let outcome = service.scaffold(&request, &cwd)?;

    match output.format() {
        OutputFormat::Json => output.json(&ScaffoldReport::from(&outcome))?,
        _ => output.success(&format!(
            "The class {} was created successfully.",
            outcome.identity.class_name
        ))?,
    }

    Ok(())
}
