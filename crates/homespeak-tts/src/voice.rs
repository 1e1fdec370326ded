use serde::{Deserialize, Serialize};

/// A synthesis voice offered to the host for a given language
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier the host passes back in the `voice` speech option
    pub voice_id: String,
    /// Display label shown in the host UI
    pub name: String,
}

impl Voice {
    pub fn new(voice_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            name: name.into(),
        }
    }
}
