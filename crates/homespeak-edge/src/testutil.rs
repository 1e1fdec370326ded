//! Scripted backend and host-service fakes shared by the unit tests.

use crate::backend::{ChunkStream, SynthChunk, SynthesisBackend, SynthesisParams};
use crate::catalog::CatalogVoice;
use crate::entity::HostHandles;
use crate::error::{EdgeResult, EdgeTtsError};
use async_trait::async_trait;
use futures::stream;
use homespeak_tts::{
    AudioContainer, AudioConverter, ConfigEntry, DeviceRegistry, MediaPlayback, OptionsMap,
    SpeechOptions, TtsError, TtsResult,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Backend with a fixed voice catalog and a scripted chunk sequence
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    pub voices: Vec<CatalogVoice>,
    pub chunks: Vec<SynthChunk>,
    pub fail_listing: bool,
    pub last_params: Arc<Mutex<Option<SynthesisParams>>>,
}

impl ScriptedBackend {
    pub fn new(voices: Vec<CatalogVoice>, chunks: Vec<SynthChunk>) -> Self {
        Self {
            voices,
            chunks,
            ..Default::default()
        }
    }

    pub fn with_failing_listing() -> Self {
        Self {
            fail_listing: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl SynthesisBackend for ScriptedBackend {
    async fn list_voices(&self) -> EdgeResult<Vec<CatalogVoice>> {
        if self.fail_listing {
            return Err(EdgeTtsError::Backend("voice list unavailable".to_string()));
        }
        Ok(self.voices.clone())
    }

    async fn stream(&self, _message: &str, params: &SynthesisParams) -> EdgeResult<ChunkStream> {
        *self.last_params.lock().unwrap() = Some(params.clone());
        let chunks: Vec<EdgeResult<SynthChunk>> =
            self.chunks.clone().into_iter().map(Ok).collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}

/// Registry answering platform lookups from a fixed table
pub struct ScriptedRegistry {
    platforms: HashMap<String, String>,
}

impl ScriptedRegistry {
    pub fn new(platforms: &[(&str, &str)]) -> Self {
        Self {
            platforms: platforms
                .iter()
                .map(|(id, platform)| (id.to_string(), platform.to_string()))
                .collect(),
        }
    }
}

impl DeviceRegistry for ScriptedRegistry {
    fn platform_of(&self, entity_id: &str) -> Option<String> {
        self.platforms.get(entity_id).cloned()
    }
}

/// Playback service that records every call
#[derive(Default)]
pub struct RecordingPlayback {
    pub announced: Mutex<Vec<(Vec<String>, String)>>,
    pub played: Mutex<Vec<(Vec<String>, PathBuf)>>,
}

#[async_trait]
impl MediaPlayback for RecordingPlayback {
    async fn announce(
        &self,
        targets: &[String],
        message: &str,
        _options: &SpeechOptions,
    ) -> TtsResult<()> {
        self.announced
            .lock()
            .unwrap()
            .push((targets.to_vec(), message.to_string()));
        Ok(())
    }

    async fn play_file(&self, targets: &[String], path: &Path) -> TtsResult<()> {
        self.played
            .lock()
            .unwrap()
            .push((targets.to_vec(), path.to_path_buf()));
        Ok(())
    }
}

/// Converter that is either absent or returns fixed WAV bytes
pub enum ScriptedConverter {
    Unavailable,
    Wav(Vec<u8>),
}

#[async_trait]
impl AudioConverter for ScriptedConverter {
    async fn convert(
        &self,
        _input: AudioContainer,
        _bytes: Vec<u8>,
        _output: AudioContainer,
    ) -> TtsResult<Vec<u8>> {
        match self {
            ScriptedConverter::Unavailable => Err(TtsError::ConversionFailed(
                "ffmpeg not found on PATH".to_string(),
            )),
            ScriptedConverter::Wav(bytes) => Ok(bytes.clone()),
        }
    }
}

pub fn host_handles(platforms: &[(&str, &str)], converter: ScriptedConverter) -> HostHandles {
    host_handles_with(Arc::new(RecordingPlayback::default()), platforms, converter)
}

pub fn host_handles_with(
    playback: Arc<RecordingPlayback>,
    platforms: &[(&str, &str)],
    converter: ScriptedConverter,
) -> HostHandles {
    HostHandles {
        registry: Arc::new(ScriptedRegistry::new(platforms)),
        playback,
        converter: Arc::new(converter),
    }
}

pub fn entry_with_options(pairs: &[(&str, &str)]) -> ConfigEntry {
    let options: OptionsMap = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ConfigEntry::new("Edge TTS (test)", OptionsMap::new(), options)
}
