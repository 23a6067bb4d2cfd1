// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launch configuration for the diagnostic binary, plus helpers for the
// development app-id file the vendor runtime consults when a title is
// started outside the launcher.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::AppId;

/// File name the vendor runtime looks for beside the executable during
/// development launches.
pub const DEV_APP_ID_FILE: &str = "steam_appid.txt";

/// Persistent settings for the `dampfwerk` diagnostic binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// App id used when none is given on the command line.
    pub app_id: Option<AppId>,
    /// Write the development app-id file before attempting initialisation.
    pub write_dev_app_id_file: bool,
}

impl LaunchConfig {
    /// Load a config from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Write the development app-id file into `dir`, returning its path.
///
/// The file holds the decimal app id and nothing else. Overwrites any
/// existing file.
pub fn write_dev_app_id_file(dir: &Path, app_id: AppId) -> Result<PathBuf> {
    let path = dir.join(DEV_APP_ID_FILE);
    fs::write(&path, format!("{app_id}\n"))?;
    Ok(path)
}

/// Read the development app-id file from `dir`, if present.
pub fn read_dev_app_id_file(dir: &Path) -> Result<Option<AppId>> {
    let path = dir.join(DEV_APP_ID_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path)?;
    Ok(Some(raw.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = LaunchConfig::load(&dir.path().join("absent.json")).expect("load");
        assert!(config.app_id.is_none());
        assert!(!config.write_dev_app_id_file);
    }

    #[test]
    fn config_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dampfwerk.json");
        let config = LaunchConfig {
            app_id: Some(AppId(480)),
            write_dev_app_id_file: true,
        };
        config.save(&path).expect("save");
        let loaded = LaunchConfig::load(&path).expect("load");
        assert_eq!(loaded.app_id, Some(AppId(480)));
        assert!(loaded.write_dev_app_id_file);
    }

    #[test]
    fn dev_app_id_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_dev_app_id_file(dir.path(), AppId(480)).expect("write");
        assert!(path.ends_with(DEV_APP_ID_FILE));
        let read = read_dev_app_id_file(dir.path()).expect("read");
        assert_eq!(read, Some(AppId(480)));
    }

    #[test]
    fn absent_dev_app_id_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(read_dev_app_id_file(dir.path()).expect("read"), None);
    }

    #[test]
    fn garbage_dev_app_id_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(DEV_APP_ID_FILE), "spacewar").expect("write");
        assert!(read_dev_app_id_file(dir.path()).is_err());
    }
}
