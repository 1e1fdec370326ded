use serde::{Deserialize, Serialize};

/// Audio container format for synthesized speech
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioContainer {
    #[default]
    Mp3,
    Wav,
}

impl AudioContainer {
    /// Container label as used in option values and file extensions
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioContainer::Mp3 => "mp3",
            AudioContainer::Wav => "wav",
        }
    }
}

impl std::fmt::Display for AudioContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AudioContainer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(AudioContainer::Mp3),
            "wav" => Ok(AudioContainer::Wav),
            _ => Err(format!("Unknown audio container: {}", s)),
        }
    }
}

/// Synthesized speech returned to the host: the container label describes the
/// bytes actually produced, which may differ from the requested container
/// when a provider falls back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TtsAudio {
    pub container: AudioContainer,
    pub bytes: Vec<u8>,
}

/// Speech options attached to a request or stored per entry.
///
/// Absent fields fall back to the entry's stored options and then to the
/// provider's built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_format: Option<String>,
}

impl SpeechOptions {
    /// Field-wise merge: values present on `self` win over `defaults`.
    pub fn merged_onto(&self, defaults: &SpeechOptions) -> SpeechOptions {
        SpeechOptions {
            voice: self.voice.clone().or_else(|| defaults.voice.clone()),
            rate: self.rate.clone().or_else(|| defaults.rate.clone()),
            volume: self.volume.clone().or_else(|| defaults.volume.clone()),
            pitch: self.pitch.clone().or_else(|| defaults.pitch.clone()),
            output_format: self
                .output_format
                .clone()
                .or_else(|| defaults.output_format.clone()),
            preferred_format: self
                .preferred_format
                .clone()
                .or_else(|| defaults.preferred_format.clone()),
        }
    }
}

/// Device metadata the host attaches to the entity's device registry record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// (domain, identifier) pairs
    pub identifiers: Vec<(String, String)>,
    pub manufacturer: String,
    pub model: String,
}

/// Category the host uses to group the entity in its UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}
