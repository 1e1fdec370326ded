//! Host services a speech provider consumes.
//!
//! The host platform hands a provider concrete implementations of these
//! traits at entry setup. Tests substitute scripted fakes.

use crate::error::TtsResult;
use crate::types::{AudioContainer, SpeechOptions};
use async_trait::async_trait;
use std::path::Path;

/// Device registry lookups
pub trait DeviceRegistry: Send + Sync {
    /// Owning integration/platform tag for a media-player entity id, or
    /// `None` when the id is unknown to the registry.
    fn platform_of(&self, entity_id: &str) -> Option<String>;
}

/// Media playback service calls
#[async_trait]
pub trait MediaPlayback: Send + Sync {
    /// Standard announce pipeline: the host streams synthesized audio to the
    /// targets over HTTP.
    async fn announce(
        &self,
        targets: &[String],
        message: &str,
        options: &SpeechOptions,
    ) -> TtsResult<()>;

    /// Play a local file on the targets, returning once every target has
    /// acknowledged the call.
    async fn play_file(&self, targets: &[String], path: &Path) -> TtsResult<()>;
}

/// Audio format conversion helper
#[async_trait]
pub trait AudioConverter: Send + Sync {
    /// Convert `bytes` from one container to another. Fails when the
    /// underlying converter binary is absent.
    async fn convert(
        &self,
        input: AudioContainer,
        bytes: Vec<u8>,
        output: AudioContainer,
    ) -> TtsResult<Vec<u8>>;
}
