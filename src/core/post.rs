//! A post held in memory as an ordered list of lines

use std::path::{Path, PathBuf};

/// A single markdown file, split into lines that keep their terminators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    path: PathBuf,
    lines: Vec<String>,
}

impl Post {
    /// Build a post from its path and full text content
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(content),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for progress output, falling back to the full path
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    /// Reassemble the file content. No terminator is added or normalized.
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Split text after every `\n`, keeping the terminator on each line.
///
/// `\r\n` endings stay intact and a final line without a terminator is kept
/// as-is, so concatenating the result reproduces the input exactly.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}
