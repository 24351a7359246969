use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "shopsync-language";
pub const THEME_KEY: &str = "shopsync-theme";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("preferences file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unsupported theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A small persisted string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store, for tests and one-off runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two flags that survive restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Reads both flags. Missing or unrecognized values fall back to defaults.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { language, theme }
    }

    pub fn set_language(
        &mut self,
        store: &mut impl PreferenceStore,
        language: Language,
    ) -> Result<(), PreferenceError> {
        store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(())
    }

    pub fn set_theme(
        &mut self,
        store: &mut impl PreferenceStore,
        theme: Theme,
    ) -> Result<(), PreferenceError> {
        store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.set_theme(store, next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_set_and_reload() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        prefs.set_language(&mut store, Language::Bn).unwrap();
        assert_eq!(prefs.toggle_theme(&mut store).unwrap(), Theme::Dark);

        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("bn"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}
