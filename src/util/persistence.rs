use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::Preferences;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FiberOperator";
const APP_NAME: &str = "FiberPortal";

fn preferences_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("preferences.json"))
}

pub fn load_preferences() -> Option<Preferences> {
    load_preferences_from(&preferences_file()?)
}

/// Missing or unreadable files yield `None` so callers fall back to defaults.
pub fn load_preferences_from(path: &Path) -> Option<Preferences> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str::<Preferences>(&data)
        .ok()
        .map(Preferences::normalized)
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), PersistSaveError> {
    let path = preferences_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_preferences_to(&path, preferences)
}

pub fn save_preferences_to(path: &Path, preferences: &Preferences) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Appearance;

    #[test]
    fn saved_preferences_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = Preferences {
            appearance: Appearance::Dark,
            sidebar_open: false,
            page_size: 25,
        };

        save_preferences_to(&path, &prefs).unwrap();
        assert_eq!(load_preferences_from(&path), Some(prefs));
    }

    #[test]
    fn corrupt_or_missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        assert_eq!(load_preferences_from(&path), None);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_preferences_from(&path), None);
        assert_eq!(load_preferences_from(&path).unwrap_or_default(), Preferences::default());
    }
}
