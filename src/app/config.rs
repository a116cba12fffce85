// SPDX-License-Identifier: MPL-2.0
//! Demo application preferences, persisted as a `settings.toml` under the
//! platform's config directory. The `*_from_path`/`*_to_path` variants
//! exist so tests can work against a temp directory.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedMediaPicker";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder the picker opens on launch; remembered across runs.
    pub start_dir: Option<PathBuf>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub show_filenames: Option<bool>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<AppConfig> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(AppConfig::default())
}

pub fn save(config: &AppConfig) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let config = AppConfig {
            start_dir: Some(PathBuf::from("/media/photos")),
            columns: Some(4),
            show_filenames: Some(true),
        };
        save_to_path(&config, &path).expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.start_dir, config.start_dir);
        assert_eq!(loaded.columns, Some(4));
        assert_eq!(loaded.show_filenames, Some(true));
    }

    #[test]
    fn unreadable_content_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not = [valid").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.start_dir, None);
        assert_eq!(loaded.columns, None);
    }

    #[test]
    fn missing_file_is_an_error_from_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nope.toml");
        assert!(load_from_path(&path).is_err());
    }
}
