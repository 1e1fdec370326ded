//! Synthesis backend seam over the `msedge-tts` crate.
//!
//! The Edge Read Aloud wire protocol stays inside `msedge-tts`; this module
//! only adapts its voice listing and streaming synthesis to the provider's
//! types. The seam is a trait so tests can script voice catalogs and chunk
//! streams without a network.

use crate::catalog::CatalogVoice;
use crate::error::{EdgeResult, EdgeTtsError};
use async_trait::async_trait;
use futures::stream::{self, Stream};
use msedge_tts::tts::SpeechConfig;
use msedge_tts::tts::stream::{SynthesizedResponse, msedge_tts_split_async};
use msedge_tts::voice::get_voices_list_async;
use std::pin::Pin;

/// Audio format requested from the Edge service for every synthesis
pub const EDGE_AUDIO_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// One chunk of a synthesis stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SynthChunk {
    /// Audio payload, in stream order
    Audio(Vec<u8>),
    /// Non-audio information (word boundaries and the like)
    Metadata,
}

/// Ordered stream of synthesis chunks
pub type ChunkStream = Pin<Box<dyn Stream<Item = EdgeResult<SynthChunk>> + Send>>;

/// Prosody settings resolved for one synthesis request.
///
/// Values stay in their validated string form (`+10%`, `-2Hz`) until this
/// seam; the Edge service itself takes signed integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesisParams {
    pub voice: String,
    pub rate: String,
    pub volume: String,
    pub pitch: String,
}

impl SynthesisParams {
    fn speech_config(&self) -> EdgeResult<SpeechConfig> {
        Ok(SpeechConfig {
            voice_name: self.voice.clone(),
            audio_format: EDGE_AUDIO_FORMAT.to_string(),
            rate: parse_signed(&self.rate, "%")?,
            volume: parse_signed(&self.volume, "%")?,
            pitch: parse_signed(&self.pitch, "Hz")?,
        })
    }
}

fn parse_signed(value: &str, suffix: &str) -> EdgeResult<i32> {
    value
        .strip_suffix(suffix)
        .and_then(|v| v.parse::<i32>().ok())
        .ok_or_else(|| {
            EdgeTtsError::InvalidProsody(format!("{value:?} is not a signed {suffix} value"))
        })
}

/// Synthesis backend contract
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// List the voices the service offers
    async fn list_voices(&self) -> EdgeResult<Vec<CatalogVoice>>;

    /// Open a streaming synthesis session for `message`
    async fn stream(&self, message: &str, params: &SynthesisParams) -> EdgeResult<ChunkStream>;
}

/// Backend talking to the real Edge Read Aloud service
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeBackend;

impl EdgeBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SynthesisBackend for EdgeBackend {
    async fn list_voices(&self) -> EdgeResult<Vec<CatalogVoice>> {
        let voices = get_voices_list_async().await?;
        Ok(voices
            .into_iter()
            .filter_map(|voice| {
                // Entries without a short name cannot be addressed by a
                // synthesis call.
                let short_name = voice.short_name?;
                Some(CatalogVoice {
                    short_name,
                    locale: voice.locale.unwrap_or_default(),
                    friendly_name: voice.friendly_name,
                    name: Some(voice.name),
                })
            })
            .collect())
    }

    async fn stream(&self, message: &str, params: &SynthesisParams) -> EdgeResult<ChunkStream> {
        let config = params.speech_config()?;
        let (mut sender, reader) = msedge_tts_split_async().await?;
        sender.send(message, &config).await?;

        // The sender is carried through the stream state so the socket's
        // write half stays open while the response is drained.
        let chunks = stream::unfold((sender, reader), |(sender, mut reader)| async move {
            loop {
                if !reader.can_read().await {
                    return None;
                }
                match reader.read().await {
                    Ok(Some(SynthesizedResponse::AudioBytes(data))) => {
                        return Some((Ok(SynthChunk::Audio(data)), (sender, reader)));
                    }
                    Ok(Some(SynthesizedResponse::AudioMetadata(_))) => {
                        return Some((Ok(SynthChunk::Metadata), (sender, reader)));
                    }
                    Ok(None) => continue,
                    Err(err) => {
                        return Some((Err(EdgeTtsError::from(err)), (sender, reader)));
                    }
                }
            }
        });
        Ok(Box::pin(chunks))
    }
}
