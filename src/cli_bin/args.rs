//! Command-line argument definitions

use byline::Config;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "byline",
    version,
    about = "Insert a missing author line into the front matter of markdown posts",
    long_about = "byline scans a directory of markdown posts and, for every post whose \
                  front matter has no author line, inserts one directly after the title \
                  line. Posts that already name an author are left untouched."
)]
pub struct Cli {
    /// Directory containing the posts (overrides the config file)
    pub directory: Option<PathBuf>,

    /// Load settings from a YAML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Author name to insert
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Front matter key of the author line
    #[arg(long, value_name = "KEY")]
    pub author_key: Option<String>,

    /// Front matter key of the title line
    #[arg(long, value_name = "KEY")]
    pub title_key: Option<String>,

    /// Only process files whose name ends with this suffix
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Preview changes without modifying files (show diff)
    #[arg(long)]
    pub dry_run: bool,

    /// Create backup files with this suffix
    #[arg(long, value_name = "SUFFIX")]
    pub backup_suffix: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress and non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output formats for the batch report
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per post plus a summary
    Text,
    /// The full report as JSON
    Json,
}

impl Cli {
    /// Apply command-line overrides on top of a base configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(directory) = &self.directory {
            config.directory = directory.clone();
        }
        if let Some(author) = &self.author {
            config.author = author.clone();
        }
        if let Some(key) = &self.author_key {
            config.author_key = key.clone();
        }
        if let Some(key) = &self.title_key {
            config.title_key = key.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.backup_suffix.is_some() {
            config.backup_suffix = self.backup_suffix.clone();
        }
        config
    }
}
