//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` in config;
    /// `auto` from either resolves to Human (TTY) or Plain (piped).
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// The result line of a command. Shown as a success message normally;
    /// in quiet mode only the bare `value` is written.
    pub fn result(&self, msg: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return self.term.write_line(value);
        }
        self.success(msg)
    }

    /// One compact JSON document on its own line.  Emitted even in quiet
    /// mode: a caller asking for JSON is parsing stdout.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, no_color: bool, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn quiet_suppresses_print() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
        assert!(out.result("done", "/etc/systemd/system/x.service").is_ok());
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        let cfg = AppConfig::default();
        assert!(make_manager(OutputFormat::Human, false, &cfg).supports_color());
        assert!(!make_manager(OutputFormat::Human, true, &cfg).supports_color());
    }

    #[test]
    fn plain_and_json_never_color() {
        let cfg = AppConfig::default();
        assert!(!make_manager(OutputFormat::Plain, false, &cfg).supports_color());
        assert!(!make_manager(OutputFormat::Json, false, &cfg).supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "json".into();
        assert_eq!(
            make_manager(OutputFormat::Auto, false, &cfg).format(),
            OutputFormat::Json
        );
        assert_eq!(
            make_manager(OutputFormat::Plain, false, &cfg).format(),
            OutputFormat::Plain
        );
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        assert!(!make_manager(OutputFormat::Human, false, &cfg).supports_color());
    }
}
