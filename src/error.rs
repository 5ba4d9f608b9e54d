//! Error types for the byline library
//!
//! Errors are split into two groups. Fatal errors (directory access, bad
//! configuration) abort a batch before any post is touched. Per-post errors
//! are collected into the batch report while the remaining posts are processed.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum BylineError {
    /// The posts directory is missing, not a directory, or cannot be listed
    #[error("Cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A post could not be read (missing, unreadable, not UTF-8)
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input ran out before the closing `---` marker
    #[error("Unterminated front matter: found {markers_found} of 2 marker lines")]
    UnterminatedFrontMatter { markers_found: usize },

    /// No author line and no title line to anchor the insertion on
    #[error("No `{key}` line in front matter to insert the author after")]
    MissingTitle { key: String },

    /// The rewritten post could not be persisted
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup copy could not be created
    #[error("Cannot back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be loaded
    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Configuration file is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field key could not be compiled into a matcher
    #[error("Invalid field pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BylineError>;

impl BylineError {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn backup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Backup {
            path: path.into(),
            source,
        }
    }

    pub fn missing_title(key: impl Into<String>) -> Self {
        Self::MissingTitle { key: key.into() }
    }

    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error aborts the whole batch rather than a single post
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DirectoryAccess { .. }
            | Self::Config { .. }
            | Self::Yaml(_)
            | Self::InvalidPattern(_) => true,
            Self::Read { .. }
            | Self::UnterminatedFrontMatter { .. }
            | Self::MissingTitle { .. }
            | Self::Write { .. }
            | Self::Backup { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fatal_classification() {
        let dir = BylineError::directory_access(
            "posts",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(dir.is_fatal());

        assert!(!BylineError::UnterminatedFrontMatter { markers_found: 1 }.is_fatal());
        assert!(!BylineError::missing_title("title").is_fatal());
        assert!(!BylineError::write("a.md", io::Error::other("disk full")).is_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = BylineError::UnterminatedFrontMatter { markers_found: 1 };
        assert_eq!(
            err.to_string(),
            "Unterminated front matter: found 1 of 2 marker lines"
        );

        let err = BylineError::missing_title("title");
        assert_eq!(
            err.to_string(),
            "No `title` line in front matter to insert the author after"
        );
    }
}
