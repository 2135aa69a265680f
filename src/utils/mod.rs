//! Small shared helpers.

pub mod date;

use std::path::{Path, PathBuf};

/// Canonicalize a path, falling back to an absolute (cwd-joined) path
/// when it does not exist yet.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "page")` -> `"1 page"`
/// - `plural_count(3, "page")` -> `"3 pages"`
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "page"), "0 pages");
        assert_eq!(plural_count(1, "page"), "1 page");
        assert_eq!(plural_count(12, "file"), "12 files");
    }

    #[test]
    fn test_normalize_path_absolute_missing() {
        let path = Path::new("/definitely/not/here");
        assert_eq!(normalize_path(path), PathBuf::from("/definitely/not/here"));
    }

    #[test]
    fn test_normalize_path_relative_is_absolute() {
        assert!(normalize_path(Path::new("some/relative/path")).is_absolute());
    }
}
