//! Config file loading.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RunOverrides;

/// Load the config file layer with fallback chain.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. ./reward-video.yml
/// 3. ~/.config/reward-video/reward-video.yml
/// 4. Empty (compiled defaults apply)
pub fn load_config(config_path: Option<&PathBuf>) -> Result<RunOverrides> {
    let project_name = env!("CARGO_PKG_NAME");

    // Explicit path takes precedence
    if let Some(path) = config_path {
        return load_from_file(path).context(format!("Failed to load config from {}", path.display()));
    }

    // Try project config
    let project_config = PathBuf::from(format!("{}.yml", project_name));
    if project_config.exists() {
        match load_from_file(&project_config) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Failed to load {}: {}", project_config.display(), e),
        }
    }

    // Try user config
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
        if user_config.exists() {
            match load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Failed to load {}: {}", user_config.display(), e),
            }
        }
    }

    log::info!("No config file found, using defaults");
    Ok(RunOverrides::none())
}

fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RunOverrides> {
    let content = fs::read_to_string(&path).context("Failed to read config file")?;
    if content.trim().is_empty() {
        return Ok(RunOverrides::none());
    }
    let config: RunOverrides = serde_yaml::from_str(&content).context("Failed to parse config file")?;
    log::info!("Loaded config from: {}", path.as_ref().display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "runs: 3\nshare-probability: 0.75\nstrict: true\n").unwrap();

        let overrides = load_config(Some(&path)).unwrap();
        assert_eq!(overrides.runs, Some(3));
        assert_eq!(overrides.share_probability, Some(0.75));
        assert_eq!(overrides.strict, Some(true));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "runs: [not, a, number]\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_empty_file_is_no_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.yml");
        fs::write(&path, "").unwrap();
        assert!(load_config(Some(&path)).unwrap().is_empty());
    }
}
