use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::StorageBackend;

/// In-memory storage backend; clones share the same set of files
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    files: Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper to seed a file before use
    pub fn with_file(self, path: impl AsRef<Path>, data: impl Into<Vec<u8>>) -> Self {
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), data.into());
        self
    }

    /// Current bytes of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

impl StorageBackend for MemoryBackend {
    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut files = self.files.borrow_mut();
        let data = files.remove(from).ok_or_else(|| not_found(from))?;
        files.insert(to.to_path_buf(), data);
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_files() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.write(Path::new("a.json"), b"[]").unwrap();
        assert_eq!(other.contents("a.json").unwrap(), b"[]");
    }

    #[test]
    fn test_rename_overwrites_target() {
        let backend = MemoryBackend::new()
            .with_file("live", "new")
            .with_file("backup", "old");

        backend.rename(Path::new("live"), Path::new("backup")).unwrap();
        assert!(!backend.exists(Path::new("live")));
        assert_eq!(backend.contents("backup").unwrap(), b"new");

        assert!(backend
            .rename(Path::new("live"), Path::new("backup"))
            .is_err());
    }
}
