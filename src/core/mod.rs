//! Core types for locating and amending front matter
//!
//! - Post: a markdown file held as lines with their terminators
//! - FrontMatter: the delimited prefix of a post and its title/author lines
//! - Insertion: the outcome of adding an author line

pub mod front_matter;
pub mod insert;
pub mod post;

pub use front_matter::{parse_front_matter, FieldMatcher, FrontMatter, MARKER};
pub use insert::{apply_author_insertion, Insertion};
pub use post::{split_lines, Post};
