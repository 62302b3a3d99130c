//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use unitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::UnitgenResult,
};

/// In-memory filesystem for testing.
///
/// Directories must be created explicitly with [`MemoryFilesystem::create_dir_all`].
/// Paths under different [`MemoryFilesystem::mount`] roots count as separate
/// volumes, so a rename between them fails like a cross-device rename does.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, MemoryFile>,
    directories: HashSet<PathBuf>,
    mounts: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    mode: u32,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and all of its parents.
    pub fn create_dir_all(&self, path: &Path) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Treat `root` as the root of its own volume.
    pub fn mount(&self, root: &Path) {
        self.create_dir_all(root);
        self.write().mounts.push(root.to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).map(|f| f.content.clone())
    }

    /// Permission bits a file was written with.
    pub fn mode(&self, path: &Path) -> Option<u32> {
        self.read().files.get(path).map(|f| f.mode)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }

    /// Longest mount root containing `path`, if any.
    fn volume_of(&self, path: &Path) -> Option<&Path> {
        self.mounts
            .iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
            .map(PathBuf::as_path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> UnitgenResult<()> {
        let mut inner = self.write();

        if !inner.parent_exists(path) {
            return Err(ApplicationError::WriteError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(
            path.to_path_buf(),
            MemoryFile {
                content: content.to_string(),
                mode,
            },
        );
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> UnitgenResult<()> {
        let mut inner = self.write();

        let failure = |reason: &str| ApplicationError::MoveError {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            reason: reason.into(),
        };

        if !inner.files.contains_key(from) {
            return Err(failure("Source file does not exist").into());
        }
        if !inner.parent_exists(to) {
            return Err(failure("Destination directory does not exist").into());
        }
        if inner.volume_of(from) != inner.volume_of(to) {
            return Err(failure("Invalid cross-device link").into());
        }

        if let Some(file) = inner.files.remove(from) {
            inner.files.insert(to.to_path_buf(), file);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitgen_core::error::UnitgenError;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("/tmp/a.service"), "x", 0o644)
            .unwrap_err();
        assert!(matches!(
            err,
            UnitgenError::Application(ApplicationError::WriteError { .. })
        ));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn write_records_content_and_mode() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/tmp"));
        fs.write_file(Path::new("/tmp/a.service"), "x", 0o644)
            .unwrap();

        assert_eq!(fs.read_file(Path::new("/tmp/a.service")).as_deref(), Some("x"));
        assert_eq!(fs.mode(Path::new("/tmp/a.service")), Some(0o644));
    }

    #[test]
    fn rename_moves_between_directories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a"));
        fs.create_dir_all(Path::new("/b"));
        fs.write_file(Path::new("/a/x.service"), "x", 0o644).unwrap();

        fs.rename(Path::new("/a/x.service"), Path::new("/b/x.service"))
            .unwrap();

        assert!(!fs.exists(Path::new("/a/x.service")));
        assert_eq!(fs.read_file(Path::new("/b/x.service")).as_deref(), Some("x"));
    }

    #[test]
    fn rename_into_missing_directory_keeps_source() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a"));
        fs.write_file(Path::new("/a/x.service"), "x", 0o644).unwrap();

        let err = fs
            .rename(Path::new("/a/x.service"), Path::new("/nope/x.service"))
            .unwrap_err();

        assert!(matches!(
            err,
            UnitgenError::Application(ApplicationError::MoveError { .. })
        ));
        assert!(fs.exists(Path::new("/a/x.service")));
    }

    #[test]
    fn rename_across_mounts_fails() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/tmp"));
        fs.mount(Path::new("/etc"));
        fs.write_file(Path::new("/tmp/x.service"), "x", 0o644).unwrap();

        let err = fs
            .rename(Path::new("/tmp/x.service"), Path::new("/etc/x.service"))
            .unwrap_err();

        match err {
            UnitgenError::Application(ApplicationError::MoveError { reason, .. }) => {
                assert!(reason.contains("cross-device"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(fs.exists(Path::new("/tmp/x.service")));
        assert!(!fs.exists(Path::new("/etc/x.service")));
    }
}
