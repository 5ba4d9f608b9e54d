//! Discovering the posts of a directory
//!
//! Only the immediate entries of the directory are considered. An entry is a
//! post when its file name ends with the configured suffix and it is, or links
//! to, a regular file. Trouble with a single entry never aborts discovery:
//! entries with other names are ignored, and a post that cannot be inspected
//! is still returned so that reading it fails for that post alone.

use crate::error::{BylineError, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Whether the file name of `path` ends with `suffix` (case-sensitive).
///
/// Compared on raw bytes, so file names that are not valid UTF-8 still match.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        .unwrap_or(false)
}

/// List the posts directly inside `directory`, sorted by path.
///
/// Subdirectories are not searched and directory entries named like posts
/// are ignored. Fails with [`BylineError::DirectoryAccess`] only if the
/// directory itself cannot be listed.
pub fn discover_posts<P: AsRef<Path>>(directory: P, suffix: &str) -> Result<Vec<PathBuf>> {
    let directory = directory.as_ref();

    let metadata =
        fs::metadata(directory).map_err(|e| BylineError::directory_access(directory, e))?;
    if !metadata.is_dir() {
        return Err(BylineError::directory_access(
            directory,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let walker = WalkDir::new(directory).min_depth(1).max_depth(1);

    let mut posts = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if has_suffix(entry.path(), suffix) && is_post_file(&entry) {
                    posts.push(entry.into_path());
                }
            }
            Err(e) if e.depth() > 0 => match e.path() {
                Some(path) if has_suffix(path, suffix) => {
                    debug!("Cannot inspect {}: {}", path.display(), e);
                    posts.push(path.to_path_buf());
                }
                _ => debug!("Ignoring unreadable entry in {}: {}", directory.display(), e),
            },
            Err(e) => return Err(BylineError::directory_access(directory, e.into())),
        }
    }

    posts.sort();
    debug!("Found {} posts in {}", posts.len(), directory.display());
    Ok(posts)
}

/// Regular files and links to them count as posts. A link whose target
/// cannot be inspected is kept, so the failure surfaces when it is read.
fn is_post_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }

    match fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(e) => {
            debug!("Cannot follow link {}: {}", entry.path().display(), e);
            true
        }
    }
}
