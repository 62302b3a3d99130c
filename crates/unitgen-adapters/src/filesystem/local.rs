//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;
use unitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{UnitgenError, UnitgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> UnitgenResult<()> {
        trace!(path = %path.display(), mode = %format!("{mode:o}"), "write_file");
        write_with_mode(path, content, mode).map_err(|e| write_error(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> UnitgenResult<()> {
        trace!(from = %from.display(), to = %to.display(), "rename");
        std::fs::rename(from, to).map_err(|e| move_error(from, to, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn write_with_mode(path: &Path, content: &str, mode: u32) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;

    // The open mode is filtered by the umask and ignored for existing files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    {
        let _ = mode;
    }

    Ok(())
}

fn write_error(path: &Path, e: io::Error) -> UnitgenError {
    ApplicationError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn move_error(from: &Path, to: &Path, e: io::Error) -> UnitgenError {
    ApplicationError::MoveError {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_file_with_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.service");

        LocalFilesystem::new()
            .write_file(&path, "[Unit]", 0o644)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[Unit]");
    }

    #[test]
    #[cfg(unix)]
    fn write_applies_mode_regardless_of_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.service");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

        LocalFilesystem::new().write_file(&path, "new", 0o644).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.service");

        let err = LocalFilesystem::new()
            .write_file(&path, "x", 0o644)
            .unwrap_err();

        assert!(matches!(
            err,
            UnitgenError::Application(ApplicationError::WriteError { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn rename_moves_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.service");
        let dest_dir = dir.path().join("dest");
        std::fs::create_dir(&dest_dir).unwrap();
        std::fs::write(&from, "x").unwrap();
        let to = dest_dir.join("a.service");

        LocalFilesystem::new().rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "x");
    }

    #[test]
    fn rename_into_missing_directory_is_move_error() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.service");
        std::fs::write(&from, "x").unwrap();
        let to = dir.path().join("missing").join("a.service");

        let err = LocalFilesystem::new().rename(&from, &to).unwrap_err();

        assert!(matches!(
            err,
            UnitgenError::Application(ApplicationError::MoveError { .. })
        ));
        assert!(from.exists());
    }

    #[test]
    fn rename_of_missing_source_is_move_error() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("ghost.service");
        let to = dir.path().join("moved.service");

        let err = LocalFilesystem::new().rename(&from, &to).unwrap_err();

        assert!(matches!(
            err,
            UnitgenError::Application(ApplicationError::MoveError { .. })
        ));
    }
}
