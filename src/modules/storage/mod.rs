mod file;
mod memory;

use std::io;
use std::path::Path;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Whole-file storage used by the credential gate and the contact repository.
///
/// Every method addresses one file by path. A missing file is a normal state
/// (`read` returns `Ok(None)`), not an error.
pub trait StorageBackend {
    /// Read the complete file, or `None` when it does not exist
    fn read(&self, path: &Path) -> io::Result<Option<Vec<u8>>>;

    /// Replace the file with `data`; the next `read` sees either the old
    /// content or all of `data`, never a mix
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to`, replacing `to` if it exists
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove(&self, path: &Path) -> io::Result<()>;
}
