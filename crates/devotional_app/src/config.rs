use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use devotional_core::date_key;
use tracing::{info, warn};

const PREFERENCES_DIR: &str = "daily-devotional";
const PREFERENCES_FILE: &str = "preferences.json";
const FALLBACK_PREFERENCES_FILE: &str = ".devotional-preferences.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub start_date: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("DEVOTIONAL_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        if let Ok(path) = std::env::var("DEVOTIONAL_PREFS_PATH") {
            if !path.trim().is_empty() {
                config.preferences_path = PathBuf::from(path);
            }
        }
        if let Ok(start) = std::env::var("DEVOTIONAL_START_DATE") {
            match date_key::from_picker_text(&start) {
                Ok(date) => config.start_date = Some(date),
                Err(err) => warn!(%err, "ignoring DEVOTIONAL_START_DATE"),
            }
        }
        info!(
            data_dir = %config.data_dir.display(),
            preferences = %config.preferences_path.display(),
            "configuration resolved"
        );
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let preferences_path = dirs::config_dir()
            .map(|dir| dir.join(PREFERENCES_DIR).join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_PREFERENCES_FILE));
        Self {
            data_dir: PathBuf::from("data"),
            preferences_path,
            start_date: None,
        }
    }
}
