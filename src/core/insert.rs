//! Adding the author line to a post

use crate::error::{BylineError, Result};

/// What happened to a post's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The author line was inserted at this index
    Inserted { line: usize },
    /// An author line already exists at this index; nothing changed
    AlreadyAuthored { line: usize },
}

impl Insertion {
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Insert `author_line` right after the title line unless an author line exists.
///
/// Indices refer to the full line list; front matter is a prefix of it, so
/// indices found there are valid here. At most one line is inserted and no
/// existing line is changed. Without an author or a title line this fails
/// with [`BylineError::MissingTitle`] and leaves `lines` untouched.
pub fn apply_author_insertion(
    lines: &mut Vec<String>,
    title_index: Option<usize>,
    author_index: Option<usize>,
    author_line: &str,
    title_key: &str,
) -> Result<Insertion> {
    if let Some(line) = author_index {
        return Ok(Insertion::AlreadyAuthored { line });
    }

    let title = title_index.ok_or_else(|| BylineError::missing_title(title_key))?;
    let at = title + 1;
    lines.insert(at, author_line.to_string());
    Ok(Insertion::Inserted { line: at })
}
