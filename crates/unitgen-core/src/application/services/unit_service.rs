//! Unit Service - main application orchestrator.
//!
//! This service coordinates the install workflow:
//! 1. Render the unit from its spec
//! 2. Write it into the staging directory
//! 3. Rename it into the destination directory
//!
//! A failure at any step aborts the workflow. A staged file left behind by
//! a failed rename is not removed.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, UNIT_FILE_MODE},
    },
    domain::{InstallPlan, ServiceSpec, UnitFile},
    error::UnitgenResult,
};

/// Renders, stages and relocates systemd unit files.
pub struct UnitService {
    filesystem: Box<dyn Filesystem>,
}

impl UnitService {
    /// Create a new unit service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use unitgen_core::application::{UnitService, ports::*};
    ///
    /// let service = UnitService::new(filesystem); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render `spec` and write it to `<staging_dir>/<name>.service`.
    ///
    /// The path never leaves `staging_dir`, see [`ServiceSpec::path_in`].
    /// Returns the staged path.
    #[instrument(skip_all, fields(unit = %spec.file_name(), staging = %staging_dir.display()))]
    pub fn stage(&self, spec: &ServiceSpec, staging_dir: &Path) -> UnitgenResult<PathBuf> {
        let unit = UnitFile::render(spec);
        let staged = spec.path_in(staging_dir);

        self.filesystem
            .write_file(&staged, &unit.content, UNIT_FILE_MODE)?;

        debug!(path = %staged.display(), bytes = unit.content.len(), "Unit file staged");
        Ok(staged)
    }

    /// Move `source` into `destination_dir`, keeping its base name.
    ///
    /// Returns the final path.
    #[instrument(skip_all, fields(source = %source.display(), destination = %destination_dir.display()))]
    pub fn relocate(&self, source: &Path, destination_dir: &Path) -> UnitgenResult<PathBuf> {
        let Some(base_name) = source.file_name() else {
            return Err(ApplicationError::MoveError {
                from: source.to_path_buf(),
                to: destination_dir.to_path_buf(),
                reason: "source path has no file name".into(),
            }
            .into());
        };
        let destination = destination_dir.join(base_name);

        if self.filesystem.exists(&destination) {
            warn!(path = %destination.display(), "Replacing existing unit file");
        }

        self.filesystem.rename(source, &destination)?;

        debug!(path = %destination.display(), "Unit file relocated");
        Ok(destination)
    }

    /// Stage and relocate the unit described by `plan`.
    ///
    /// This is the main use case. Returns the final path of the unit file.
    #[instrument(skip_all, fields(unit = %plan.spec.file_name()))]
    pub fn install(&self, plan: &InstallPlan) -> UnitgenResult<PathBuf> {
        info!(
            staging = %plan.staging_dir.display(),
            location = %plan.location.display(),
            "Installing unit file"
        );

        let staged = self.stage(&plan.spec, &plan.staging_dir)?;
        let installed = self.relocate(&staged, &plan.location)?;

        info!(path = %installed.display(), "Install completed successfully");
        Ok(installed)
    }

    /// Render the unit for `plan` without touching the filesystem.
    pub fn preview(plan: &InstallPlan) -> UnitFile {
        UnitFile::render(&plan.spec)
    }
}
