use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::date_key::DayKey;
use crate::entry::{AlternateEntry, DevotionalEntry};
use crate::error::LoadError;

pub const PRIMARY_FILE: &str = "entries.json";
pub const SECONDARY_FILE: &str = "esv_cache.json";

/// Immutable, loaded-once collection of devotional entries plus the optional
/// alternate-translation cache keyed by the same day keys.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<DevotionalEntry>,
    index: HashMap<DayKey, usize>,
    alternates: BTreeMap<DayKey, AlternateEntry>,
    duplicates: Vec<DayKey>,
}

impl EntryStore {
    /// Reads the primary and (optionally) secondary documents from disk.
    /// Only the primary document can fail the load.
    pub fn load(primary: impl AsRef<Path>, secondary: Option<&Path>) -> Result<Self, LoadError> {
        let primary = primary.as_ref();
        let primary_json = fs::read_to_string(primary).map_err(|source| LoadError::Read {
            path: primary.to_path_buf(),
            source,
        })?;

        let secondary_json = secondary.and_then(|path| match fs::read_to_string(path) {
            Ok(raw) => Some(raw),
            Err(err) => {
                warn!(path = %path.display(), %err, "alternate translations unavailable");
                None
            }
        });

        let store = Self::from_json(&primary_json, secondary_json.as_deref())?;
        info!(
            path = %primary.display(),
            entries = store.len(),
            alternates = store.alternates.len(),
            "devotional data loaded"
        );
        Ok(store)
    }

    /// Loads `entries.json` and `esv_cache.json` from a data directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let secondary: PathBuf = dir.join(SECONDARY_FILE);
        Self::load(dir.join(PRIMARY_FILE), Some(secondary.as_path()))
    }

    /// Parses both documents. The primary must be a JSON array; records
    /// inside it that are not objects are skipped with a warning.
    pub fn from_json(primary: &str, secondary: Option<&str>) -> Result<Self, LoadError> {
        let records: Vec<Value> = serde_json::from_str(primary)?;
        let entries = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| {
                match serde_json::from_value::<DevotionalEntry>(record) {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        warn!(position, %err, "skipping unreadable devotional record");
                        None
                    }
                }
            })
            .collect();
        let alternates = secondary.map(parse_alternates).unwrap_or_default();
        Ok(Self::from_parts(entries, alternates))
    }

    pub fn from_parts(
        entries: Vec<DevotionalEntry>,
        alternates: BTreeMap<DayKey, AlternateEntry>,
    ) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut duplicates = Vec::new();

        for (position, entry) in entries.iter().enumerate() {
            let Some(key) = entry.key() else {
                warn!(day_key = entry.raw_key(), "skipping entry with invalid day key");
                continue;
            };
            if index.contains_key(&key) {
                if !duplicates.contains(&key) {
                    warn!(%key, "day key appears more than once; first entry wins");
                    duplicates.push(key);
                }
                continue;
            }
            index.insert(key, position);
        }
        duplicates.sort();

        Self {
            entries,
            index,
            alternates,
            duplicates,
        }
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DevotionalEntry> {
        self.find_by_key(DayKey::from_date(date))
    }

    pub fn find_by_key(&self, key: DayKey) -> Option<&DevotionalEntry> {
        let found = self.index.get(&key).map(|&position| &self.entries[position]);
        if found.is_none() {
            debug!(%key, "no devotional entry for day");
        }
        found
    }

    pub fn find_alternate(&self, date: NaiveDate) -> Option<&AlternateEntry> {
        self.alternates.get(&DayKey::from_date(date))
    }

    pub fn entries(&self) -> &[DevotionalEntry] {
        &self.entries
    }

    pub fn alternates(&self) -> &BTreeMap<DayKey, AlternateEntry> {
        &self.alternates
    }

    /// Day keys used by more than one entry, sorted.
    pub fn duplicate_keys(&self) -> &[DayKey] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_alternates(raw: &str) -> BTreeMap<DayKey, AlternateEntry> {
    let records: serde_json::Map<String, Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(%err, "alternate translations malformed; continuing without them");
            return BTreeMap::new();
        }
    };

    records
        .into_iter()
        .filter_map(|(code, record)| {
            let Ok(key) = code.parse::<DayKey>() else {
                warn!(day_key = %code, "skipping alternate with invalid day key");
                return None;
            };
            match serde_json::from_value::<AlternateEntry>(record) {
                Ok(alternate) => Some((key, alternate)),
                Err(err) => {
                    warn!(%key, %err, "skipping unreadable alternate record");
                    None
                }
            }
        })
        .collect()
}
