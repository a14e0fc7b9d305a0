//! File size helpers.
//!
//! The harness reads compressed sizes from the filesystem rather than tracking
//! them in memory, so a failed `stat` is an infrastructure error and is
//! propagated ([`file_len`]).

use std::fs;
use std::io;
use std::path::Path;

/// Returns the size in bytes of the regular file at `path`.
///
/// Fails with `InvalidInput` when `path` exists but is not a regular file.
pub fn file_len(path: &Path) -> io::Result<u64> {
    let meta = fs::metadata(path)
        .map_err(|e| io::Error::new(e.kind(), format!("cannot stat {}: {}", path.display(), e)))?;
    if !meta.file_type().is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        ));
    }
    Ok(meta.len())
}
