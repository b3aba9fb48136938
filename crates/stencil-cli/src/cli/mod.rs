//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold PHP classes and launch PHP projects",
    long_about = "Stencil creates classes from built-in skeletons and starts \
                  a project's entry class as declared by its project.toml.",
    after_help = "EXAMPLES:\n\
        \x20 stencil scaffold controller --name user\n\
        \x20 stencil scaffold entity -n post -d domain/models\n\
        \x20 stencil run -- --port 8080\n\
        \x20 stencil run --project ../blog",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a class from a built-in template.
    #[command(
        visible_aliases = ["new", "add"],
        about = "Create a class from a template",
        after_help = "TEMPLATES:\n\
            \x20 class       Simple Class      (MyClass, current directory)\n\
            \x20 controller  Controller Class  (MyController, Controllers/)\n\
            \x20 entity      Entity Class      (MyEntity, Models/)\n\n\
            EXAMPLES:\n\
            \x20 stencil scaffold class\n\
            \x20 stencil scaffold controller --name user\n\
            \x20 stencil scaffold entity --name post --directory domain/models"
    )]
    Scaffold(ScaffoldArgs),

    /// Launch the project's entry class.
    #[command(
        about = "Run the project entry point",
        after_help = "The entry class is <namespace>\\<entrypoint> from project.toml,\n\
            or Application\\Program when the manifest is absent.\n\n\
            EXAMPLES:\n\
            \x20 stencil run\n\
            \x20 stencil run --project ../blog -- serve --port 8080"
    )]
    Run(RunArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # global config\n\
            \x20 stencil init --local   # .stencil.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stencil configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get launch.interpreter\n\
            \x20 stencil config list\n\
            \x20 stencil config path"
    )]
    Config(ConfigCommands),
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Template to use: class, controller or entity (case-insensitive).
    #[arg(value_name = "TEMPLATE", help = "Template: class, controller or entity")]
    pub template: Option<String>,

    /// Class name. Defaults to the template's class name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Class name")]
    pub name: Option<String>,

    /// Sub-directory of the current directory; also the namespace suffix.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Target sub-directory (also the namespace suffix)"
    )]
    pub directory: Option<String>,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `stencil run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Workspace to launch. Defaults to the current directory.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "PATH",
        help = "Project directory (default: current directory)"
    )]
    pub project: Option<PathBuf>,

    /// Arguments forwarded to the entry method.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments passed to the program"
    )]
    pub args: Vec<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stencil.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `launch.interpreter`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
