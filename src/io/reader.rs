//! Reading posts from disk

use crate::core::Post;
use crate::error::{BylineError, Result};
use std::fs;
use std::path::Path;

/// Read a post from disk as UTF-8 text
pub fn read_post<P: AsRef<Path>>(path: P) -> Result<Post> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| BylineError::read(path, e))?;
    Ok(Post::new(path, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_post() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hello.md");
        fs::write(&path, "---\r\ntitle: Hello\r\n---\r\n").unwrap();

        let post = read_post(&path).unwrap();
        assert_eq!(post.lines().len(), 3);
        assert_eq!(post.lines()[1], "title: Hello\r\n");
        assert_eq!(post.path(), path.as_path());
    }

    #[test]
    fn test_read_missing_post() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_post(temp_dir.path().join("missing.md"));
        assert!(matches!(result, Err(BylineError::Read { .. })));
    }

    #[test]
    fn test_read_non_utf8_post() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = read_post(&path);
        assert!(matches!(result, Err(BylineError::Read { .. })));
    }
}
