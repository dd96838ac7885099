//! Settings file on disk
//!
//! Plain JSON at `<config dir>/textbin/config.json`. A missing file means
//! defaults; nothing secret is ever written here.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SealError};

use super::Settings;

const APP_DIR: &str = "textbin";
const CONFIG_FILE: &str = "config.json";

/// Per-user configuration directory for TextBin.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| SealError::InvalidConfig("cannot determine the user config directory".into()))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Load settings from `path`, or from the default location when `None`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let data = fs::read(&path)?;
    let settings: Settings = serde_json::from_slice(&data)
        .map_err(|e| SealError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

/// Write settings as pretty JSON, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_vec_pretty(settings)?;
    let mut file = File::create(path)?;
    file.write_all(&json)?;
    file.write_all(b"\n")?;
    file.sync_all()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Format;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let settings = Settings {
            kdf_iterations: 250_000,
            default_format: Format::Sql,
            ..Settings::default()
        };
        save_settings(&settings, &path).unwrap();

        assert_eq!(load_settings(Some(&path)).unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, b"{ not json").unwrap();

        assert!(matches!(
            load_settings(Some(&path)),
            Err(SealError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, br#"{"kdf_iterations":0}"#).unwrap();

        assert!(matches!(
            load_settings(Some(&path)),
            Err(SealError::InvalidConfig(_))
        ));
    }
}
