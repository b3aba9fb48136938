//! Implementation of the `stencil run` command.

use tracing::{info, instrument};

use stencil_adapters::{LocalFilesystem, ProcessInvoker, SourceClassResolver, TomlManifestLoader};
use stencil_core::application::{LaunchRequest, LaunchService};

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

/// Execute the `stencil run` command.
///
/// Returns the exit status of the launched program, clamped to a byte.
#[instrument(skip_all)]
pub fn execute(args: RunArgs, config: AppConfig) -> CliResult<u8> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;

    let request = LaunchRequest::new(args.project, args.args, &cwd);
    info!(workspace = %request.workspace.display(), "Launching project");

    let mut service = LaunchService::new(
        Box::new(TomlManifestLoader::new(config.launch.manifest)),
        Box::new(SourceClassResolver::default()),
        Box::new(ProcessInvoker::new(config.launch.interpreter)),
        Box::new(LocalFilesystem::new()),
        config.launch.default_entry,
    );
    let status = service.run(&request)?;

    Ok(u8::try_from(status).unwrap_or(1))
}
