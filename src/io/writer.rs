//! Persisting posts with atomic writes, optional backups and dry-run diffs
//!
//! Content is written to a temporary file next to the post and renamed over
//! it, so a post is either fully rewritten or left as it was. A post reached
//! through a symlink is written at the link's target and the link is kept.

use crate::error::{BylineError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration for the post writer
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Generate a diff instead of writing
    pub dry_run: bool,
    /// Copy the original to `<file><suffix>` before writing
    pub backup_suffix: Option<String>,
}

/// Result of persisting a post
#[derive(Debug)]
pub struct WriteResult {
    /// Whether the new content differs from the original
    pub modified: bool,
    /// Whether anything was written to disk
    pub written: bool,
    /// Path of the backup copy, if one was made
    pub backup_path: Option<PathBuf>,
    /// Diff of the change, produced in dry-run mode
    pub diff: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostWriter {
    config: WriterConfig,
}

impl PostWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Overwrite `path` with the concatenation of `lines`.
    ///
    /// `original` is the content the lines were read from. Unchanged content
    /// is not rewritten.
    pub fn persist<P: AsRef<Path>>(
        &self,
        path: P,
        original: &str,
        lines: &[String],
    ) -> Result<WriteResult> {
        let path = path.as_ref();
        let content = lines.concat();
        let modified = content != original;

        let mut result = WriteResult {
            modified,
            written: false,
            backup_path: None,
            diff: None,
        };

        if self.config.dry_run {
            result.diff = generate_diff(original, &content, path);
            return Ok(result);
        }

        if !modified {
            return Ok(result);
        }

        let target = resolve_target(path);

        if let Some(suffix) = &self.config.backup_suffix {
            result.backup_path = Some(create_backup(&target, suffix)?);
        }

        write_atomic(&target, &content).map_err(|e| BylineError::write(path, e))?;
        result.written = true;
        Ok(result)
    }
}

/// The file actually holding the post: symlinks are followed, and a path
/// that cannot be resolved (e.g. a file not created yet) is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Copy `path` to `<path><suffix>`
fn create_backup(path: &Path, suffix: &str) -> Result<PathBuf> {
    let mut backup_name = path.as_os_str().to_owned();
    backup_name.push(suffix);
    let backup_path = PathBuf::from(backup_name);

    fs::copy(path, &backup_path).map_err(|e| BylineError::backup(path, e))?;
    Ok(backup_path)
}

/// Write through a temporary file in the same directory, keeping permissions
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path).map(|m| m.permissions()).ok();

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    if let Some(permissions) = permissions {
        temp_file.as_file().set_permissions(permissions)?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Unified-style diff of the changed region between two texts
fn generate_diff(old_content: &str, new_content: &str, path: &Path) -> Option<String> {
    if old_content == new_content {
        return None;
    }

    let old_lines: Vec<&str> = old_content.lines().collect();
    let new_lines: Vec<&str> = new_content.lines().collect();

    let common_prefix = old_lines
        .iter()
        .zip(new_lines.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let old_rest = &old_lines[common_prefix..];
    let new_rest = &new_lines[common_prefix..];

    let common_suffix = old_rest
        .iter()
        .rev()
        .zip(new_rest.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_middle = &old_rest[..old_rest.len() - common_suffix];
    let new_middle = &new_rest[..new_rest.len() - common_suffix];

    if old_middle.is_empty() && new_middle.is_empty() {
        // Only terminators differ
        return None;
    }

    let mut diff = vec![
        format!("--- {}", path.display()),
        format!("+++ {}", path.display()),
        format!(
            "@@ -{},{} +{},{} @@",
            common_prefix + 1,
            old_middle.len(),
            common_prefix + 1,
            new_middle.len()
        ),
    ];
    diff.extend(old_middle.iter().map(|line| format!("-{}", line)));
    diff.extend(new_middle.iter().map(|line| format!("+{}", line)));

    Some(diff.join("\n"))
}
