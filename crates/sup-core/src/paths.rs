use crate::error::{Result, SupError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const CONFIG_DIR: &str = ".config/sup";
pub const CONFIG_FILE: &str = "config.yaml";
pub const TEMPLATE_FILE: &str = "standup.md.tera";
pub const STANDUP_FILE: &str = "standup.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(SupError::HomeNotFound)
}

pub fn config_dir(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR)
}

/// `~/.config/sup/config.yaml`
pub fn default_config_path(home: &Path) -> PathBuf {
    config_dir(home).join(CONFIG_FILE)
}

/// The template written by `sup init`, next to the config file.
pub fn template_beside(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(TEMPLATE_FILE)
}

/// `~/standup.yaml`
pub fn home_standup_file(home: &Path) -> PathBuf {
    home.join(STANDUP_FILE)
}

/// Expand a leading `~/` (or a bare `~`) to the home directory.
///
/// Paths without the prefix, and any path when the home directory is
/// unknown, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };
    match (rest, home::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Walk upward from `start` and return the first `standup.yaml` found.
pub fn find_upward(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(STANDUP_FILE))
        .find(|candidate| candidate.is_file())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_under_home() {
        assert_eq!(
            default_config_path(Path::new("/home/me")),
            PathBuf::from("/home/me/.config/sup/config.yaml")
        );
    }

    #[test]
    fn template_sits_beside_config() {
        assert_eq!(
            template_beside(Path::new("/etc/sup/config.yaml")),
            PathBuf::from("/etc/sup/standup.md.tera")
        );
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/abs/file"), PathBuf::from("/abs/file"));
        assert_eq!(expand_home("rel/~/file"), PathBuf::from("rel/~/file"));
        assert_eq!(expand_home("~user/file"), PathBuf::from("~user/file"));
    }

    #[test]
    fn expand_home_replaces_prefix() {
        if let Some(home) = home::home_dir() {
            assert_eq!(expand_home("~/w/standup.yaml"), home.join("w/standup.yaml"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn find_upward_from_subdir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(STANDUP_FILE), "project: A\n").unwrap();
        let deep = dir.path().join("a/b/c");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(find_upward(&deep), Some(dir.path().join(STANDUP_FILE)));
    }

    #[test]
    fn find_upward_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(STANDUP_FILE), "").unwrap();
        let sub = dir.path().join("team");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join(STANDUP_FILE), "").unwrap();
        assert_eq!(find_upward(&sub), Some(sub.join(STANDUP_FILE)));
    }
}
