//! The batch driver: discover, read, parse, amend and persist every post
//!
//! Each post is handled on its own. A failure on one post is recorded in the
//! [`BatchReport`] and the batch moves on; posts already written stay written.
//! Only a failure to list the directory aborts the run.

use crate::config::Config;
use crate::core::{apply_author_insertion, parse_front_matter, FieldMatcher, Insertion};
use crate::error::{BylineError, Result};
use crate::io::{discover_posts, read_post, PostWriter, WriterConfig};
use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Outcome of processing one post
#[derive(Debug)]
pub struct PostOutcome {
    pub path: PathBuf,
    pub insertion: Insertion,
    /// Whether the file on disk was rewritten
    pub written: bool,
    pub diff: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertedPost {
    pub path: PathBuf,
    /// Index of the inserted author line
    pub line: usize,
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FailedPost {
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_error")]
    pub error: BylineError,
}

fn serialize_error<S>(error: &BylineError, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

/// Summary of a batch run
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// Posts that received an author line
    pub inserted: Vec<InsertedPost>,
    /// Posts that already had an author line
    pub skipped: Vec<PathBuf>,
    /// Posts that could not be processed
    pub failed: Vec<FailedPost>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.inserted.len() + self.skipped.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, outcome: PostOutcome) {
        match outcome.insertion {
            Insertion::Inserted { line } => self.inserted.push(InsertedPost {
                path: outcome.path,
                line,
                written: outcome.written,
                diff: outcome.diff,
            }),
            Insertion::AlreadyAuthored { .. } => self.skipped.push(outcome.path),
        }
    }
}

/// Inserts a fixed author line into every post of a directory that lacks one
#[derive(Debug)]
pub struct Inserter {
    config: Config,
    author_line: String,
    title: FieldMatcher,
    author: FieldMatcher,
    writer: PostWriter,
}

impl Inserter {
    pub fn new(config: Config) -> Result<Self> {
        let title = FieldMatcher::new(&config.title_key)?;
        let author = FieldMatcher::new(&config.author_key)?;
        let writer = PostWriter::with_config(WriterConfig {
            dry_run: config.dry_run,
            backup_suffix: config.backup_suffix.clone(),
        });

        Ok(Self {
            author_line: config.author_line(),
            config,
            title,
            author,
            writer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, amend and persist a single post
    pub fn process_post<P: AsRef<Path>>(&self, path: P) -> Result<PostOutcome> {
        let mut post = read_post(path.as_ref())?;
        let original = post.content();

        let front_matter = parse_front_matter(post.lines(), &self.title, &self.author)?;
        debug!(
            "{}: front matter spans {} lines, title at {:?}, author at {:?}",
            post.path().display(),
            front_matter.lines.len(),
            front_matter.title_index,
            front_matter.author_index
        );
        let (title_index, author_index) = (front_matter.title_index, front_matter.author_index);

        let insertion = apply_author_insertion(
            post.lines_mut(),
            title_index,
            author_index,
            &self.author_line,
            self.title.key(),
        )?;

        let result = self.writer.persist(post.path(), &original, post.lines())?;

        match insertion {
            Insertion::Inserted { line } => {
                info!("{}: inserted author at line {}", post.name(), line + 1)
            }
            Insertion::AlreadyAuthored { .. } => info!("{}: already has an author", post.name()),
        }

        Ok(PostOutcome {
            path: path.as_ref().to_path_buf(),
            insertion,
            written: result.written,
            diff: result.diff,
        })
    }

    /// Process every post in the configured directory
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(|_| {})
    }

    /// Process every post, calling `on_post` before each one is started
    pub fn run_with_progress<F>(&self, mut on_post: F) -> Result<BatchReport>
    where
        F: FnMut(&Path),
    {
        let posts = discover_posts(&self.config.directory, &self.config.suffix)?;
        if posts.is_empty() {
            warn!(
                "No posts ending in {} found in {}",
                self.config.suffix,
                self.config.directory.display()
            );
        }

        let mut report = BatchReport::default();
        for path in posts {
            on_post(&path);
            match self.process_post(&path) {
                Ok(outcome) => report.record(outcome),
                Err(error) => {
                    warn!("{}: {}", path.display(), error);
                    report.failed.push(FailedPost { path, error });
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn inserter_for(dir: &Path) -> Inserter {
        Inserter::new(Config {
            directory: dir.to_path_buf(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_process_post_inserts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.md");
        fs::write(&path, "---\ntitle: Hello\n---\nBody text\n").unwrap();

        let outcome = inserter_for(temp_dir.path()).process_post(&path).unwrap();
        assert_eq!(outcome.insertion, Insertion::Inserted { line: 2 });
        assert!(outcome.written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "---\ntitle: Hello\nauthor: Alexej Gossmann\n---\nBody text\n"
        );
    }

    #[test]
    fn test_run_collects_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.md"), "---\ntitle: A\n---\n").unwrap();
        fs::write(root.join("b.md"), "---\ntitle: B\nauthor: X\n---\n").unwrap();
        fs::write(root.join("c.md"), "---\ntitle: C\n").unwrap();
        fs::write(root.join("d.md"), "---\ndate: today\n---\n").unwrap();

        let mut seen = Vec::new();
        let report = inserter_for(root)
            .run_with_progress(|p| seen.push(p.file_name().unwrap().to_owned()))
            .unwrap();

        assert_eq!(seen, vec!["a.md", "b.md", "c.md", "d.md"]);
        assert_eq!(report.total(), 4);
        assert_eq!(report.inserted.len(), 1);
        assert_eq!(report.skipped, vec![root.join("b.md")]);
        assert_eq!(report.failed.len(), 2);
        assert!(!report.is_success());
        assert!(matches!(
            report.failed[0].error,
            BylineError::UnterminatedFrontMatter { .. }
        ));
        assert!(matches!(report.failed[1].error, BylineError::MissingTitle { .. }));
    }

    #[test]
    fn test_report_serializes_errors_as_text() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("c.md"), "---\n").unwrap();

        let report = inserter_for(temp_dir.path()).run().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["failed"][0]["error"],
            "Unterminated front matter: found 1 of 2 marker lines"
        );
    }
}
