//! Host-persisted config entries.
//!
//! An entry is the record behind one configured provider instance. The host
//! owns serialization; this module only defines the shape and the lifecycle
//! states a provider's setup/unload hooks move an entry through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// String-keyed option mapping as persisted by the host
pub type OptionsMap = BTreeMap<String, String>;

/// Lifecycle state of a config entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// One configured provider instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
    /// Immutable after creation
    pub data: OptionsMap,
    /// Replaced wholesale by the options flow
    pub options: OptionsMap,
    #[serde(default)]
    pub state: EntryState,
}

impl ConfigEntry {
    /// Create a new entry in the unloaded state with a fresh id
    pub fn new(title: impl Into<String>, data: OptionsMap, options: OptionsMap) -> Self {
        Self {
            entry_id: Uuid::new_v4().to_string(),
            title: title.into(),
            data,
            options,
            state: EntryState::Unloaded,
        }
    }

    /// Stored value for `key`: options first, then immutable data
    pub fn stored_value(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .or_else(|| self.data.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unloaded() {
        let entry = ConfigEntry::new("Edge TTS (en-US-AriaNeural)", OptionsMap::new(), OptionsMap::new());
        assert_eq!(entry.state, EntryState::Unloaded);
        assert!(!entry.entry_id.is_empty());
        assert!(entry.data.is_empty());
    }

    #[test]
    fn test_stored_value_prefers_options_over_data() {
        let mut data = OptionsMap::new();
        data.insert("voice".to_string(), "from-data".to_string());
        let mut options = OptionsMap::new();
        options.insert("voice".to_string(), "from-options".to_string());

        let entry = ConfigEntry::new("t", data, options);
        assert_eq!(entry.stored_value("voice"), Some("from-options"));

        let entry_without_option = ConfigEntry::new(
            "t",
            {
                let mut data = OptionsMap::new();
                data.insert("rate".to_string(), "+5%".to_string());
                data
            },
            OptionsMap::new(),
        );
        assert_eq!(entry_without_option.stored_value("rate"), Some("+5%"));
        assert_eq!(entry_without_option.stored_value("pitch"), None);
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let mut options = OptionsMap::new();
        options.insert("voice".to_string(), "en-US-AriaNeural".to_string());
        let entry = ConfigEntry::new("Edge TTS (en-US-AriaNeural)", OptionsMap::new(), options);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: ConfigEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }
}
