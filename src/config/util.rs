//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/content/development/  ← cwd
/// /home/user/docs/docmeta.toml          ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Upward search starting at `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("content/development/backend");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join("docmeta.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("docmeta.toml")).unwrap();
        assert_eq!(found, tmp.path().join("docmeta.toml"));
    }

    #[test]
    fn test_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(find_config_from(tmp.path(), Path::new("no-such-docmeta.toml")).is_none());
    }

    #[test]
    fn test_absolute_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        assert!(find_config_from(Path::new("/"), &path).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_from(Path::new("/"), &path), Some(path));
    }
}
