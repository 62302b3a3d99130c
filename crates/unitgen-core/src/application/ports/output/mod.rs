//! Driven (output) ports - implemented by infrastructure.
//!
//! The `unitgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::UnitgenResult;

/// Permission bits of a written unit file (`rw-r--r--`).
pub const UNIT_FILE_MODE: u32 = 0o644;

/// Port for the two filesystem operations an install needs.
///
/// Implemented by:
/// - `unitgen_adapters::filesystem::LocalFilesystem` (production)
/// - `unitgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations report failures of `write_file` as
/// `ApplicationError::WriteError` and failures of `rename` as
/// `ApplicationError::MoveError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create or truncate `path`, write `content`, and set `mode` on it.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> UnitgenResult<()>;

    /// Rename `from` to `to`. Never falls back to copy and delete.
    fn rename(&self, from: &Path, to: &Path) -> UnitgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
