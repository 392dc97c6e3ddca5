//! Persistent settings (database location).
//!
//! Settings live in `~/.config/retro-rdb/settings.toml`. The CLI and any
//! other front-end share this file so RDB path resolution is consistent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;

/// File name of the database inside the metadata directory.
pub const RDB_FILENAME: &str = "game.rdb";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Explicit RDB file location. Unset means the default data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppSettings {
    pub fn to_toml_string(&self) -> Result<String, MetadataError> {
        toml::to_string_pretty(self).map_err(|e| MetadataError::settings(e.to_string()))
    }
}

/// Canonical path to the settings file: `~/.config/retro-rdb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("retro-rdb").join("settings.toml")
}

/// Directory holding downloaded metadata: `~/.local/share/retro-rdb/metadata`.
pub fn metadata_dir() -> Result<PathBuf, MetadataError> {
    let base = dirs::data_dir()
        .ok_or_else(|| MetadataError::path("Could not determine data directory"))?;
    Ok(base.join("retro-rdb").join("metadata"))
}

/// Default RDB location when nothing is configured.
pub fn default_rdb_path() -> Result<PathBuf, MetadataError> {
    Ok(metadata_dir()?.join(RDB_FILENAME))
}

/// Load settings from the canonical location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to the canonical location.
pub fn save_settings(settings: &AppSettings) -> Result<(), MetadataError> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), MetadataError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = settings.to_toml_string()?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the RDB path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `database.path` in `settings.toml`
/// 3. [`default_rdb_path`]
pub fn resolve_rdb_path(cli_override: Option<PathBuf>) -> Result<PathBuf, MetadataError> {
    resolve_rdb_path_with(cli_override, &load_settings())
}

/// [`resolve_rdb_path`] against already-loaded settings.
pub fn resolve_rdb_path_with(
    cli_override: Option<PathBuf>,
    settings: &AppSettings,
) -> Result<PathBuf, MetadataError> {
    if let Some(p) = cli_override {
        return Ok(p);
    }
    if let Some(p) = settings.database.path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p.clone());
    }
    default_rdb_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_are_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_corrupt_settings_are_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[database\npath = ").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = AppSettings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/roms/meta/Sega - Master System.rdb")),
            },
        };

        save_settings_to(&path, &settings).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_unset_path_is_not_written() {
        let text = AppSettings::default().to_toml_string().unwrap();
        assert!(!text.contains("path"));
    }

    #[test]
    fn test_resolve_prefers_cli_override() {
        let settings = AppSettings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/from/settings.rdb")),
            },
        };
        let resolved =
            resolve_rdb_path_with(Some(PathBuf::from("/from/cli.rdb")), &settings).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/cli.rdb"));
    }

    #[test]
    fn test_resolve_uses_settings() {
        let settings = AppSettings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("/from/settings.rdb")),
            },
        };
        let resolved = resolve_rdb_path_with(None, &settings).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/settings.rdb"));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let Ok(default) = default_rdb_path() else {
            // No data directory on this host
            return;
        };
        let empty = AppSettings {
            database: DatabaseSettings {
                path: Some(PathBuf::new()),
            },
        };
        assert_eq!(resolve_rdb_path_with(None, &empty).unwrap(), default);
        assert!(default.ends_with(RDB_FILENAME));
    }
}
