//! Line-based front matter detection
//!
//! Front matter is the prefix of a post up to and including the second line
//! that contains `---`. No YAML parsing happens here: field lines are only
//! recognised by a case-insensitive prefix of their key.

use crate::error::{BylineError, Result};
use regex::{Regex, RegexBuilder};

/// Substring that marks a front matter delimiter line
pub const MARKER: &str = "---";

/// Case-insensitive, start-anchored match on a front matter key
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    key: String,
    regex: Regex,
}

impl FieldMatcher {
    pub fn new(key: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!("^{}", regex::escape(key)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            key: key.to_string(),
            regex,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Index of the last line starting with this key, if any
    pub fn find_last(&self, lines: &[String]) -> Option<usize> {
        lines.iter().rposition(|line| self.is_match(line))
    }
}

/// Front matter of a post, borrowed from its lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Lines from the start up to and including the closing marker
    pub lines: &'a [String],
    /// Everything after the closing marker
    pub body: &'a [String],
    /// Last line matching the title key
    pub title_index: Option<usize>,
    /// Last line matching the author key
    pub author_index: Option<usize>,
}

/// Split `lines` into front matter and body and locate the title and author lines.
///
/// Fails with [`BylineError::UnterminatedFrontMatter`] when fewer than two
/// marker lines exist.
pub fn parse_front_matter<'a>(
    lines: &'a [String],
    title: &FieldMatcher,
    author: &FieldMatcher,
) -> Result<FrontMatter<'a>> {
    let mut markers_found = 0;
    let mut end = None;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(MARKER) {
            markers_found += 1;
            if markers_found == 2 {
                end = Some(i + 1);
                break;
            }
        }
    }

    let end = end.ok_or(BylineError::UnterminatedFrontMatter { markers_found })?;
    let (front, body) = lines.split_at(end);

    Ok(FrontMatter {
        lines: front,
        body,
        title_index: title.find_last(front),
        author_index: author.find_last(front),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::post::split_lines;
    use pretty_assertions::assert_eq;

    fn matchers() -> (FieldMatcher, FieldMatcher) {
        (
            FieldMatcher::new("title").unwrap(),
            FieldMatcher::new("author").unwrap(),
        )
    }

    #[test]
    fn test_basic_split() {
        let (title, author) = matchers();
        let lines = split_lines("---\ntitle: Hello\n---\nBody text\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();

        assert_eq!(fm.lines.len(), 3);
        assert_eq!(fm.body, &["Body text\n".to_string()]);
        assert_eq!(fm.title_index, Some(1));
        assert_eq!(fm.author_index, None);
    }

    #[test]
    fn test_case_insensitive_prefix() {
        let (title, author) = matchers();
        let lines = split_lines("---\nTITLE: X\nAuthor: Y\n---\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();
        assert_eq!(fm.title_index, Some(1));
        assert_eq!(fm.author_index, Some(2));
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        let (title, author) = matchers();
        let lines = split_lines("---\n  title: indented\nsubtitle: no\n---\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();
        assert_eq!(fm.title_index, None);
    }

    #[test]
    fn test_last_match_wins() {
        let (title, author) = matchers();
        let lines = split_lines("---\ntitle: one\ndate: 2020\ntitle: two\n---\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();
        assert_eq!(fm.title_index, Some(3));
    }

    #[test]
    fn test_body_is_not_inspected() {
        let (title, author) = matchers();
        let lines = split_lines("---\ntitle: T\n---\nauthor: in body\ntitle: in body\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();
        assert_eq!(fm.title_index, Some(1));
        assert_eq!(fm.author_index, None);
        assert_eq!(fm.body.len(), 2);
    }

    #[test]
    fn test_marker_anywhere_in_line() {
        let (title, author) = matchers();
        let lines = split_lines("--- \ntitle: T\n-----\nrest\n---\n");
        let fm = parse_front_matter(&lines, &title, &author).unwrap();
        assert_eq!(fm.lines.len(), 3);
        assert_eq!(fm.body.len(), 2);
    }

    #[test]
    fn test_unterminated() {
        let (title, author) = matchers();
        let lines = split_lines("---\ntitle: Hello\nBody\n");
        let err = parse_front_matter(&lines, &title, &author).unwrap_err();
        assert!(matches!(
            err,
            BylineError::UnterminatedFrontMatter { markers_found: 1 }
        ));

        let err = parse_front_matter(&[], &title, &author).unwrap_err();
        assert!(matches!(
            err,
            BylineError::UnterminatedFrontMatter { markers_found: 0 }
        ));
    }

    #[test]
    fn test_key_is_escaped() {
        let matcher = FieldMatcher::new("a.b").unwrap();
        assert!(matcher.is_match("A.B: 1"));
        assert!(!matcher.is_match("axb: 1"));
    }
}
