//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`UNITGEN_PATHS__UNIT_DIR`, ...)
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "UNITGEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where units are staged and installed.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Used when neither `--tmp` nor the params document supply `tmp`.
    pub staging_dir: PathBuf,
    /// Used when neither `--location` nor the params document supply `location`.
    pub unit_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                staging_dir: PathBuf::from("/tmp"),
                unit_dir: PathBuf::from("/etc/systemd/system"),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::default_config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path of the configuration file in effect: the explicit one if given,
    /// otherwise the platform default.
    pub fn config_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit
            .cloned()
            .unwrap_or_else(Self::default_config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.unitgen.toml` in the current directory.
    pub fn default_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "unitgen", "unitgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".unitgen.toml"))
    }

    /// Staging directory as a parameter-bag value.
    pub fn staging_dir(&self) -> String {
        path_value(&self.paths.staging_dir)
    }

    /// Install directory as a parameter-bag value.
    pub fn unit_dir(&self) -> String {
        path_value(&self.paths.unit_dir)
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
