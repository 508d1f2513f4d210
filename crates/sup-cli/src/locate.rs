use std::path::{Path, PathBuf};
use sup_core::{config::Config, paths};

/// Resolve the config file.
///
/// Priority:
/// 1. `--config` flag / `SUP_CONFIG` env var (passed in as `explicit`)
/// 2. `~/.config/sup/config.yaml`
pub fn resolve_config_path(explicit: Option<&Path>) -> sup_core::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let home = paths::home_dir()?;
    Ok(paths::default_config_path(&home))
}

/// Resolve the standup file.
///
/// Priority:
/// 1. `--file` flag / `SUP_FILE` env var (passed in as `explicit`)
/// 2. `standup_file` from the config
/// 3. Walk upward from `cwd` looking for `standup.yaml`
/// 4. `~/standup.yaml`
pub fn resolve_standup_file(
    explicit: Option<&Path>,
    config: &Config,
) -> sup_core::Result<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_standup_file_from(explicit, config, &cwd, paths::home_dir().ok().as_deref())
}

fn resolve_standup_file_from(
    explicit: Option<&Path>,
    config: &Config,
    cwd: &Path,
    home: Option<&Path>,
) -> sup_core::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = config.standup_file() {
        return Ok(p);
    }
    if let Some(p) = paths::find_upward(cwd) {
        return Ok(p);
    }
    let home = home.ok_or(sup_core::SupError::HomeNotFound)?;
    Ok(paths::home_standup_file(home))
}

/// Resolve the template file, `None` meaning the built-in one.
pub fn resolve_template(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| config.template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.yaml");
        assert_eq!(resolve_config_path(Some(path.as_path())).unwrap(), path);
    }

    #[test]
    fn explicit_file_wins() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            standup_file: Some("/elsewhere/standup.yaml".to_string()),
            ..Config::default()
        };
        let explicit = dir.path().join("mine.yaml");
        let result =
            resolve_standup_file_from(Some(explicit.as_path()), &cfg, dir.path(), Some(dir.path())).unwrap();
        assert_eq!(result, explicit);
    }

    #[test]
    fn config_file_beats_discovery() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("standup.yaml"), "").unwrap();
        let cfg = Config {
            standup_file: Some("/elsewhere/standup.yaml".to_string()),
            ..Config::default()
        };
        let result = resolve_standup_file_from(None, &cfg, dir.path(), None).unwrap();
        assert_eq!(result, PathBuf::from("/elsewhere/standup.yaml"));
    }

    #[test]
    fn finds_standup_file_upward() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("standup.yaml"), "").unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let result = resolve_standup_file_from(None, &Config::default(), &subdir, None).unwrap();
        assert_eq!(result, dir.path().join("standup.yaml"));
    }

    #[test]
    fn falls_back_to_home() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let result =
            resolve_standup_file_from(None, &Config::default(), cwd.path(), Some(home.path()))
                .unwrap();
        assert_eq!(result, home.path().join("standup.yaml"));
    }

    #[test]
    fn template_prefers_explicit() {
        let cfg = Config {
            template: Some("/cfg/t.tera".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_template(Some(Path::new("/flag/t.tera")), &cfg),
            Some(PathBuf::from("/flag/t.tera"))
        );
        assert_eq!(
            resolve_template(None, &cfg),
            Some(PathBuf::from("/cfg/t.tera"))
        );
        assert_eq!(resolve_template(None, &Config::default()), None);
    }
}
