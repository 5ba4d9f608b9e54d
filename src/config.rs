//! Run configuration
//!
//! A [`Config`] carries everything the inserter needs: which directory to scan,
//! which author line to insert, and how posts are written back. It can be
//! loaded from a YAML file, and the CLI overrides individual fields on top.

use crate::error::{BylineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_AUTHOR: &str = "Alexej Gossmann";
pub const DEFAULT_AUTHOR_KEY: &str = "author";
pub const DEFAULT_TITLE_KEY: &str = "title";
pub const DEFAULT_SUFFIX: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the posts (not searched recursively)
    pub directory: PathBuf,
    /// Author name written into posts that lack one
    pub author: String,
    /// Front matter key identifying the author line
    pub author_key: String,
    /// Front matter key identifying the title line
    pub title_key: String,
    /// File name suffix selecting posts
    pub suffix: String,
    /// Report changes without writing them
    pub dry_run: bool,
    /// Copy each post to `<file><suffix>` before rewriting it
    pub backup_suffix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            author: DEFAULT_AUTHOR.to_string(),
            author_key: DEFAULT_AUTHOR_KEY.to_string(),
            title_key: DEFAULT_TITLE_KEY.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
            backup_suffix: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| BylineError::config(path, format!("cannot read file: {}", e)))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// The exact line inserted into posts, including its terminator
    pub fn author_line(&self) -> String {
        format!("{}: {}\n", self.author_key, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_author_line() {
        let config = Config::default();
        assert_eq!(config.author_line(), "author: Alexej Gossmann\n");
        assert_eq!(config.suffix, ".md");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("directory: _posts\nauthor: Jane Roe\n").unwrap();
        assert_eq!(config.directory, PathBuf::from("_posts"));
        assert_eq!(config.author_line(), "author: Jane Roe\n");
        assert_eq!(config.title_key, "title");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_yaml("autor: typo\n");
        assert!(matches!(result, Err(BylineError::Yaml(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load("/nonexistent/byline.yaml");
        assert!(matches!(result, Err(BylineError::Config { .. })));
    }
}
