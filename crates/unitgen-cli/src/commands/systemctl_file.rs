//! Implementation of the `unitgen systemctl-file` command.
//!
//! Responsibility: assemble the parameter bag from flags, the `--params`
//! document and configuration, call the core unit service, and report the
//! final path. No rendering logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use unitgen_adapters::LocalFilesystem;
use unitgen_core::{
    application::UnitService,
    domain::{InstallPlan, ServiceParams},
};

use crate::{
    cli::{OutputFormat, SystemctlFileArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable result for `--output-format json`.
#[derive(Debug, Serialize)]
struct InstallReport<'a> {
    path: &'a Path,
    dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Execute the `unitgen systemctl-file` command.
///
/// Dispatch sequence:
/// 1. Build the parameter bag (flags > `--params` > config)
/// 2. Resolve it into an install plan under the chosen field policy
/// 3. Early-exit if `--dry-run`
/// 4. Stage and relocate via `UnitService`
/// 5. Print the final path (also under `--quiet`)
#[instrument(skip_all)]
pub fn execute(args: SystemctlFileArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Parameter bag
    let params = collect_params(&args, &config)?;

    // 2. Typed plan
    let plan = params
        .resolve(args.field_policy())
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        unit = %plan.spec.file_name(),
        staging = %plan.staging_dir.display(),
        location = %plan.location.display(),
        "Install plan resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return show_dry_run(&plan, &output);
    }

    // 4. Stage and relocate
    let service = UnitService::new(Box::new(LocalFilesystem::new()));
    let installed = service.install(&plan).map_err(CliError::Core)?;

    info!(path = %installed.display(), "Unit file installed");

    // 5. Report
    report(&installed, &output)
}

// ── Parameter assembly ────────────────────────────────────────────────────────

fn collect_params(args: &SystemctlFileArgs, config: &AppConfig) -> CliResult<ServiceParams> {
    let from_file = match &args.params {
        Some(path) => load_params_file(path)?,
        None => ServiceParams::default(),
    };

    Ok(from_file
        .merge(args.flag_params())
        .with_default_dirs(Some(config.staging_dir()), Some(config.unit_dir())))
}

/// Read a JSON parameter document.
pub fn load_params_file(path: &Path) -> CliResult<ServiceParams> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::ParamsFileNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            message: format!("Failed to read parameter file '{}'", path.display()),
            source: e,
        },
    })?;

    serde_json::from_str(&text).map_err(|e| CliError::InvalidParamsFile {
        path: path.to_path_buf(),
        source: e,
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_dry_run(plan: &InstallPlan, out: &OutputManager) -> CliResult<()> {
    let unit = UnitService::preview(plan);
    let destination = plan.final_path();

    if out.format() == OutputFormat::Json {
        out.json(&InstallReport {
            path: &destination,
            dry_run: true,
            content: Some(&unit.content),
        })?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would stage {} and move it to {}",
        plan.staged_path().display(),
        destination.display(),
    ))?;
    out.header(&unit.file_name)?;
    out.print(&unit.content)?;
    if destination.exists() {
        out.warning(&format!("{} already exists and would be replaced", destination.display()))?;
    }
    Ok(())
}

fn report(installed: &Path, out: &OutputManager) -> CliResult<()> {
    match out.format() {
        OutputFormat::Json => out.json(&InstallReport {
            path: installed,
            dry_run: false,
            content: None,
        })?,
        _ => {
            let path = installed.display().to_string();
            out.result(
                &format!("Systemd service file created and moved to: {path}"),
                &path,
            )?
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use unitgen_core::domain::FieldPolicy;

    fn args() -> SystemctlFileArgs {
        SystemctlFileArgs {
            name: None,
            description: None,
            exec_start: None,
            restart: None,
            tmp: None,
            location: None,
            params: None,
            lenient: false,
            dry_run: false,
        }
    }

    #[test]
    fn config_supplies_directories_when_absent() {
        let params = collect_params(&args(), &AppConfig::default()).unwrap();
        assert_eq!(params.tmp.as_deref(), Some("/tmp"));
        assert_eq!(params.location.as_deref(), Some("/etc/systemd/system"));
        assert_eq!(params.name, None);
    }

    #[test]
    fn flags_override_params_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("p.json");
        fs::write(
            &file,
            r#"{"name": "fromfile", "Restart": "always", "location": "/srv/units"}"#,
        )
        .unwrap();

        let params = collect_params(
            &SystemctlFileArgs {
                name: Some("fromflag".into()),
                params: Some(file),
                ..args()
            },
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(params.name.as_deref(), Some("fromflag"));
        assert_eq!(params.restart.as_deref(), Some("always"));
        assert_eq!(params.location.as_deref(), Some("/srv/units"));
        assert_eq!(params.tmp.as_deref(), Some("/tmp"));
    }

    #[test]
    fn strict_policy_reports_missing_flag() {
        let params = collect_params(
            &SystemctlFileArgs {
                name: Some("x".into()),
                ..args()
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert!(params.resolve(FieldPolicy::Strict).is_err());
    }

    #[test]
    fn missing_params_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_params_file(&dir.path().join("absent.json")),
            Err(CliError::ParamsFileNotFound { .. })
        ));
    }

    #[test]
    fn malformed_params_file_is_invalid() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("p.json");
        fs::write(&file, r#"{"name": 42}"#).unwrap();
        assert!(matches!(
            load_params_file(&file),
            Err(CliError::InvalidParamsFile { .. })
        ));
    }
}
