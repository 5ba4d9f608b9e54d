//! byline: insert a missing author line into the front matter of markdown posts
//!
//! For every post in a directory, the front matter (everything up to the second
//! line containing `---`) is scanned for an `author` line. Posts without one
//! get the configured author line inserted right after their `title` line and
//! are rewritten in place. Posts that already name an author are left
//! byte-for-byte untouched, so running the tool twice is the same as running
//! it once.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use byline::{Config, Inserter, Result};
//!
//! fn main() -> Result<()> {
//!     let config = Config {
//!         directory: "_posts".into(),
//!         author: "Jane Roe".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let report = Inserter::new(config)?.run()?;
//!     for failed in &report.failed {
//!         eprintln!("{}: {}", failed.path.display(), failed.error);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: line splitting, front matter detection and the insertion itself
//! - [`io`]: discovering, reading and atomically persisting posts
//! - [`batch`]: the per-directory driver and its report
//! - [`config`]: run configuration, loadable from YAML
//! - [`error`]: error types

pub use batch::{BatchReport, FailedPost, InsertedPost, Inserter, PostOutcome};
pub use config::Config;
pub use self::core::{
    apply_author_insertion, parse_front_matter, FieldMatcher, FrontMatter, Insertion, Post,
};
pub use error::{BylineError, Result};
pub use io::{discover_posts, read_post, PostWriter, WriteResult, WriterConfig};

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
