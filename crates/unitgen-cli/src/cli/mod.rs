//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use unitgen_core::domain::{FieldPolicy, ServiceParams};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "unitgen",
    bin_name = "unitgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render a systemd service unit and move it into place",
    long_about = "unitgen writes a fixed-layout systemd service unit to a staging \
                  directory and renames it into its final location.",
    after_help = "EXAMPLES:\n\
        \x20 unitgen systemctl-file --name myapp --description 'My App' \\\n\
        \x20     --exec-start /usr/bin/myapp --restart always\n\
        \x20 unitgen systemctl-file --params myapp.json --dry-run\n\
        \x20 unitgen completions bash > /usr/share/bash-completion/completions/unitgen",
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
    /// Render a service unit, stage it, and move it into place.
    #[command(
        name = "systemctl-file",
        visible_alias = "install",
        about = "Create a systemd service unit file",
        after_help = "EXAMPLES:\n\
            \x20 unitgen systemctl-file -n myapp -d 'My App' -e /usr/bin/myapp -r always\n\
            \x20 unitgen systemctl-file --params myapp.json --location /etc/systemd/system\n\
            \x20 unitgen install --params partial.json --lenient --dry-run"
    )]
    SystemctlFile(SystemctlFileArgs),

    /// Initialise a unitgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 unitgen init                    # default location\n\
            \x20 unitgen --config ./unitgen.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 unitgen completions bash > ~/.local/share/bash-completion/completions/unitgen\n\
            \x20 unitgen completions zsh  > ~/.zfunc/_unitgen\n\
            \x20 unitgen completions fish > ~/.config/fish/completions/unitgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the unitgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 unitgen config get paths.unit_dir\n\
            \x20 unitgen config list\n\
            \x20 unitgen config path"
    )]
    Config(ConfigCommands),
}

// ── systemctl-file ────────────────────────────────────────────────────────────

/// Arguments for `unitgen systemctl-file`.
///
/// Every value flag is optional here; missing ones are taken from the
/// `--params` document and, for the two directories, from configuration.
#[derive(Debug, Args)]
pub struct SystemctlFileArgs {
    /// Base name of the unit, without the `.service` suffix.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Value of `Description=`.
    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Value of `ExecStart=`.
    #[arg(
        short = 'e',
        long = "exec-start",
        value_name = "COMMAND",
        allow_hyphen_values = true
    )]
    pub exec_start: Option<String>,

    /// Value of `Restart=` (e.g. always, on-failure).
    #[arg(short = 'r', long = "restart", value_name = "POLICY")]
    pub restart: Option<String>,

    /// Staging directory the unit is written to first.
    #[arg(long = "tmp", value_name = "DIR")]
    pub tmp: Option<String>,

    /// Directory the unit is moved into.
    #[arg(short = 'l', long = "location", value_name = "DIR")]
    pub location: Option<String>,

    /// JSON parameter document with keys name, description, ExecStart,
    /// Restart, tmp and location.
    #[arg(short = 'p', long = "params", value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Treat missing parameters as empty strings instead of failing.
    #[arg(long = "lenient", help = "Default missing parameters to empty strings")]
    pub lenient: bool,

    /// Print the unit and its destination without writing anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

impl SystemctlFileArgs {
    /// Values given on the command line, as a parameter bag.
    pub fn flag_params(&self) -> ServiceParams {
        ServiceParams {
            name: self.name.clone(),
            description: self.description.clone(),
            exec_start: self.exec_start.clone(),
            restart: self.restart.clone(),
            tmp: self.tmp.clone(),
            location: self.location.clone(),
        }
    }

    pub fn field_policy(&self) -> FieldPolicy {
        if self.lenient {
            FieldPolicy::Lenient
        } else {
            FieldPolicy::Strict
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `unitgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `unitgen completions`.
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

/// Subcommands for `unitgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.unit_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
