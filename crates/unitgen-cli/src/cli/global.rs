//! Flags shared by every `unitgen` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so they may appear
//! before or after the subcommand name.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the diagnostics written to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "More diagnostics on stderr; stdout keeps only results.
    (none)  - warnings, e.g. an existing unit being replaced
    -v      - install start and the final path
    -vv     - resolved plan: unit name, staging and location directories
    -vvv    - every write and rename with its mode and paths
RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    /// Only print results: the installed path, JSON, or errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only the installed path and errors"
    )]
    pub quiet: bool,

    /// Plain output without ANSI escapes; `NO_COLOR` sets it as well.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output (also via NO_COLOR)"
    )]
    pub no_color: bool,

    /// TOML file with `[paths]` and `[output]` tables.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Config file with default staging and unit directories"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are written to stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Symbols and colour.
    Human,
    /// Symbols, no colour.
    Plain,
    /// One JSON object per result, e.g. `{"path": ..., "dry_run": false}`.
    Json,
}
