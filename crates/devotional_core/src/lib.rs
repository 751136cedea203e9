pub mod audit;
pub mod date_key;
pub mod entry;
pub mod error;
pub mod navigator;
pub mod observer;
pub mod render;
pub mod service;
pub mod store;
pub mod theme;

pub use crate::date_key::DayKey;
pub use crate::error::{DateKeyError, LoadError, PreferenceError};
pub use crate::service::{DevotionalService, DevotionalServiceBuilder};
pub use crate::store::EntryStore;
