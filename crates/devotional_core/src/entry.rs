use serde::{Deserialize, Serialize};

use crate::date_key::DayKey;

/// One day's reading as stored in `entries.json`.
///
/// Every field is optional and a wrongly typed value reads as absent, so one
/// bad record never fails the whole document. The renderer substitutes a
/// placeholder for each missing field independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevotionalEntry {
    #[serde(
        rename = "mmdd",
        alias = "url_date_code",
        default,
        deserialize_with = "lenient::deserialize"
    )]
    pub day_key: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub display_date: Option<String>,
    #[serde(
        rename = "bible_verse",
        alias = "devotional",
        default,
        deserialize_with = "lenient::deserialize"
    )]
    pub primary_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub verse_ref: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub poem: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub month: Option<u32>,
}

impl DevotionalEntry {
    /// Parsed key, or `None` when the stored code is missing or not a
    /// month-day string.
    pub fn key(&self) -> Option<DayKey> {
        self.day_key.as_deref()?.parse().ok()
    }

    /// Stored key as written, for diagnostics.
    pub fn raw_key(&self) -> &str {
        self.day_key.as_deref().unwrap_or("")
    }
}

/// Alternate rendering of a day's scripture, from `esv_cache.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateEntry {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub text: Option<String>,
    #[serde(
        rename = "ref",
        default,
        deserialize_with = "lenient::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<String>,
}

impl AlternateEntry {
    /// Text worth showing: present and non-empty.
    pub fn visible_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Reads any JSON value and keeps it only if it has the expected type.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }
}
