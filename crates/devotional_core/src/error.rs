use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the primary devotional dataset. Secondary data never
/// produces this error; it degrades to an empty collection instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse devotional entries: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("expected YYYY-MM-DD, got `{0}`")]
    Malformed(String),

    #[error("`{0}` is not a calendar date")]
    OutOfRange(String),

    #[error("`{0}` is not a valid month-day key")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("unable to write preferences to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = LoadError::Read {
            path: PathBuf::from("data/entries.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/entries.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn malformed_picker_text_display() {
        let err = DateKeyError::Malformed("06/02/2025".to_string());
        assert_eq!(err.to_string(), "expected YYYY-MM-DD, got `06/02/2025`");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<LoadError>();
        assert_impl::<DateKeyError>();
        assert_impl::<PreferenceError>();
    }
}
