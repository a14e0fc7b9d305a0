//! Filesystem utilities used by the harness drivers.
//!
//! - [`file_list`]: sorted, non-recursive enumeration of a source folder
//! - [`file_size`]: size lookups for source files and compressed artifacts

pub mod file_list;
pub mod file_size;

pub use file_list::list_regular_files;
pub use file_size::file_len;

use std::path::Path;

/// Returns the display name of `path`: its final component, lossily decoded.
///
/// Falls back to the whole path when there is no final component (e.g. `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
