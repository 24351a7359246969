use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shopsync_common::preferences::{PreferenceError, PreferenceStore};
use tracing::{info, warn};

/// `<config_dir>/shopsync/preferences.json`, or the working directory when the
/// platform has no config dir.
pub fn default_prefs_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shopsync").join("preferences.json")
}

/// Preferences kept as a flat JSON object on disk. Every `set` rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store. A missing file is an empty store; an unreadable or
    /// corrupt one is logged and treated as empty, so defaults apply.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!("ignoring malformed preferences at {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("could not read preferences at {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, data).map_err(|source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// The in-memory value only changes once the file write succeeds.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        self.values = values;
        Ok(())
    }
}
