//! The Edge TTS speech entity.
//!
//! One entity exists per loaded config entry. The voice catalog and derived
//! language list are computed here once and read-only afterwards; every
//! synthesis request resolves its options against the entry-stored defaults
//! captured at construction.

use crate::announce;
use crate::audio::strip_id3v2;
use crate::backend::{SynthChunk, SynthesisBackend, SynthesisParams};
use crate::catalog::{self, CatalogVoice};
use crate::config::{
    CONF_OUTPUT_FORMAT, CONF_PITCH, CONF_RATE, CONF_VOICE, CONF_VOLUME, DEFAULT_OUTPUT_FORMAT,
    DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOICE, DEFAULT_VOLUME, DOMAIN, SUPPORTED_OPTIONS,
};
use crate::error::{EdgeResult, EdgeTtsError};
use async_trait::async_trait;
use futures::StreamExt;
use homespeak_tts::{
    AudioContainer, AudioConverter, ConfigEntry, DeviceInfo, DeviceRegistry, EntityCategory,
    MediaPlayback, SpeechEntity, SpeechOptions, SpeechProvider, TtsAudio, TtsError, TtsResult,
    Voice,
};
use log::warn;
use std::sync::Arc;

/// Host services handed to the entity at setup
#[derive(Clone)]
pub struct HostHandles {
    pub registry: Arc<dyn DeviceRegistry>,
    pub playback: Arc<dyn MediaPlayback>,
    pub converter: Arc<dyn AudioConverter>,
}

/// Edge TTS entity
pub struct EdgeSpeechEntity {
    unique_id: String,
    name: String,
    backend: Arc<dyn SynthesisBackend>,
    host: HostHandles,
    voices: Vec<CatalogVoice>,
    supported_languages: Vec<String>,
    default_language: String,
    default_voice: String,
    default_rate: String,
    default_volume: String,
    default_pitch: String,
    default_output_format: String,
}

impl EdgeSpeechEntity {
    pub fn new(
        entry: &ConfigEntry,
        voices: Vec<CatalogVoice>,
        backend: Arc<dyn SynthesisBackend>,
        host: HostHandles,
    ) -> Self {
        let default_voice = entry_value(entry, CONF_VOICE, DEFAULT_VOICE);

        let mut locales: Vec<String> = voices
            .iter()
            .map(|voice| voice.locale.clone())
            .filter(|locale| !locale.is_empty())
            .collect();
        locales.sort();
        locales.dedup();

        let default_language = catalog::locale_from_voice(&default_voice);
        if !locales.contains(&default_language) {
            locales.push(default_language.clone());
        }

        Self {
            unique_id: entry.entry_id.clone(),
            name: entry.title.clone(),
            backend,
            host,
            voices,
            supported_languages: locales,
            default_language,
            default_voice,
            default_rate: entry_value(entry, CONF_RATE, DEFAULT_RATE),
            default_volume: entry_value(entry, CONF_VOLUME, DEFAULT_VOLUME),
            default_pitch: entry_value(entry, CONF_PITCH, DEFAULT_PITCH),
            default_output_format: entry_value(entry, CONF_OUTPUT_FORMAT, DEFAULT_OUTPUT_FORMAT),
        }
    }

    pub(crate) fn host(&self) -> &HostHandles {
        &self.host
    }

    /// Voice for one request: an explicit non-empty option wins; a request
    /// language triggers catalog resolution only when no voice option is
    /// present at all; everything else falls back to the entry default.
    fn resolve_voice(&self, language: &str, options: &SpeechOptions) -> String {
        let mut voice = match options.voice.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => self.default_voice.clone(),
        };
        if !language.is_empty() && options.voice.is_none() {
            if let Some(found) = catalog::voice_for_language(&self.voices, language) {
                voice = found.to_string();
            }
        }
        voice
    }

    /// Output container for one request: request-level `preferred_format`
    /// overrides request-level `output_format` overrides the stored default.
    fn resolve_container(&self, options: &SpeechOptions) -> AudioContainer {
        let label = options
            .preferred_format
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| options.output_format.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.default_output_format);
        label.parse().unwrap_or_default()
    }

    async fn synthesize_inner(
        &self,
        message: &str,
        language: &str,
        options: &SpeechOptions,
    ) -> EdgeResult<TtsAudio> {
        let params = SynthesisParams {
            voice: self.resolve_voice(language, options),
            rate: options
                .rate
                .clone()
                .unwrap_or_else(|| self.default_rate.clone()),
            volume: options
                .volume
                .clone()
                .unwrap_or_else(|| self.default_volume.clone()),
            pitch: options
                .pitch
                .clone()
                .unwrap_or_else(|| self.default_pitch.clone()),
        };

        let mut stream = self.backend.stream(message, &params).await?;
        let mut audio: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            match chunk? {
                SynthChunk::Audio(data) => audio.extend_from_slice(&data),
                SynthChunk::Metadata => {}
            }
        }
        if audio.is_empty() {
            return Err(EdgeTtsError::NoAudio);
        }

        let stripped = strip_id3v2(&audio).to_vec();

        if self.resolve_container(options) == AudioContainer::Wav {
            match self
                .host
                .converter
                .convert(AudioContainer::Mp3, stripped.clone(), AudioContainer::Wav)
                .await
            {
                Ok(wav) => {
                    return Ok(TtsAudio {
                        container: AudioContainer::Wav,
                        bytes: wav,
                    });
                }
                Err(err) => {
                    warn!("WAV conversion failed, returning MP3 audio: {}", err);
                }
            }
        }

        Ok(TtsAudio {
            container: AudioContainer::Mp3,
            bytes: stripped,
        })
    }
}

fn entry_value(entry: &ConfigEntry, key: &str, default: &str) -> String {
    entry.stored_value(key).unwrap_or(default).to_string()
}

#[async_trait]
impl SpeechEntity for EdgeSpeechEntity {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifiers: vec![(DOMAIN.to_string(), self.unique_id.clone())],
            manufacturer: "Microsoft".to_string(),
            model: "Edge TTS".to_string(),
        }
    }

    fn entity_category(&self) -> Option<EntityCategory> {
        Some(EntityCategory::Config)
    }

    fn supported_options(&self) -> &[&'static str] {
        SUPPORTED_OPTIONS
    }

    fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    fn default_language(&self) -> &str {
        &self.default_language
    }

    fn default_options(&self) -> SpeechOptions {
        SpeechOptions {
            voice: Some(self.default_voice.clone()),
            rate: Some(self.default_rate.clone()),
            volume: Some(self.default_volume.clone()),
            pitch: Some(self.default_pitch.clone()),
            output_format: None,
            preferred_format: None,
        }
    }

    fn supported_voices(&self, language: &str) -> Option<Vec<Voice>> {
        catalog::voices_for_language(&self.voices, language)
    }

    async fn synthesize(
        &self,
        message: &str,
        language: &str,
        options: &SpeechOptions,
    ) -> TtsResult<TtsAudio> {
        match self.synthesize_inner(message, language, options).await {
            Ok(audio) => Ok(audio),
            Err(err) => {
                // Internal detail goes to the log only; the host sees one
                // generic per-request failure.
                warn!("Edge TTS request failed: {}", err);
                Err(TtsError::SynthesisFailed("Edge TTS request failed".to_string()))
            }
        }
    }

    async fn announce(
        &self,
        targets: &[String],
        message: &str,
        options: &SpeechOptions,
    ) -> TtsResult<()> {
        announce::dispatch(self, targets, message, options).await
    }
}

impl SpeechProvider for EdgeSpeechEntity {
    fn provider_name(&self) -> &str {
        DOMAIN
    }

    fn provider_version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}
