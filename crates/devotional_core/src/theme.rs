//! Light/dark theme preference.
//!
//! An explicit choice is persisted under [`THEME_KEY`] and always wins. Until
//! the user makes one, the theme follows the platform preference, including
//! live changes to it.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PreferenceError;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
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

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk. A missing or unreadable
/// file reads as empty; every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring malformed preference file");
                BTreeMap::new()
            }),
            Err(err) => {
                debug!(path = %path.display(), %err, "no preference file yet");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_string_pretty(&self.values)?;
        let write_err = |source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, encoded).map_err(write_err)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    effective: Theme,
    explicit: bool,
}

impl ThemeState {
    /// Reads the stored preference once; falls back to `platform`.
    pub fn initialise(store: &dyn PreferenceStore, platform: Theme) -> Self {
        let stored = store
            .get(THEME_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!(%err, "ignoring stored theme preference");
                    None
                }
            });
        let state = match stored {
            Some(theme) => Self {
                effective: theme,
                explicit: true,
            },
            None => Self {
                effective: platform,
                explicit: false,
            },
        };
        info!(theme = %state.effective, explicit = state.explicit, "theme resolved");
        state
    }

    pub fn effective(&self) -> Theme {
        self.effective
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Flips the theme and persists the choice. The in-memory theme changes
    /// even when the write fails.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Result<Theme, PreferenceError> {
        self.effective = self.effective.toggled();
        self.explicit = true;
        store.set(THEME_KEY, self.effective.as_str())?;
        Ok(self.effective)
    }

    /// Follows a platform change unless the user has chosen explicitly.
    /// Returns whether the effective theme changed.
    pub fn on_platform_change(&mut self, platform: Theme) -> bool {
        if self.explicit || self.effective == platform {
            return false;
        }
        debug!(theme = %platform, "following platform theme");
        self.effective = platform;
        true
    }

    /// Caption for the toggle control, naming the theme it switches to.
    pub fn label(&self) -> &'static str {
        match self.effective {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        }
    }
}
