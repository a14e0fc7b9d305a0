//! Folder enumeration for batch round-trips.
//!
//! [`list_regular_files`] returns the regular files directly inside a folder,
//! sorted by file name so batch reports come out in the same order on every
//! platform and every run. Subfolders (including the harness's own artifact
//! folders) are never descended into.
//!
//! **Symlink handling**: `walkdir` runs with `follow_links(false)`, so symlink
//! entries report a symlink `file_type()` and are excluded.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// List the regular files directly inside `folder`, sorted by file name.
///
/// - Only depth-1 entries whose `file_type().is_file()` is `true` are kept.
/// - Returns an `io::Error` if `folder` cannot be read or any entry fails to
///   stat; partial listings are never returned.
pub fn list_regular_files(folder: &Path) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(walkdir_to_io)?;
        if entry.file_type().is_file() {
            result.push(entry.into_path());
        }
    }
    Ok(result)
}

fn walkdir_to_io(e: walkdir::Error) -> io::Error {
    let msg = e.to_string();
    match e.into_io_error() {
        Some(io) => io::Error::new(io.kind(), msg),
        None => io::Error::other(msg),
    }
}
