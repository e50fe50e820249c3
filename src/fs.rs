//! File system access used when writing documents.
//!
//! The writer never touches `std::fs` directly. It goes through [`FileSystem`], so
//! the backup-then-write sequence can run against an in-memory implementation.

use crate::Result;
use log::warn;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The file operations needed to back up and replace a destination file.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Creates `path`, truncating any existing file.
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }
}

/// The backup location of `path`: same directory, file name followed by `~`.
///
/// # Examples
///
/// ```rust
/// use serde_star::fs::backup_path;
/// use std::path::Path;
///
/// assert_eq!(backup_path(Path::new("run/particles.star")), Path::new("run/particles.star~"));
/// ```
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push("~");
    path.with_file_name(name)
}

/// Moves an existing file at `path` to its backup location.
///
/// Only one generation is kept: an older backup is deleted first. Returns the
/// backup path if a file was moved.
///
/// # Errors
///
/// Returns an I/O error if the old backup cannot be removed or the rename fails.
pub fn backup_if_exists<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<Option<PathBuf>> {
    if !fs.exists(path) {
        return Ok(None);
    }
    let backup = backup_path(path);
    if fs.exists(&backup) {
        warn!("replacing previous backup {}", backup.display());
        fs.remove_file(&backup)?;
    }
    fs.rename(path, &backup)?;
    Ok(Some(backup))
}
