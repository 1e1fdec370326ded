use crate::error::TtsResult;
use crate::types::{DeviceInfo, EntityCategory, SpeechOptions, TtsAudio};
use crate::voice::Voice;
use async_trait::async_trait;

/// Speech capabilities a provider exposes to the host.
///
/// The host registers one entity per config entry and routes all speech
/// requests through this trait. Implementations must be safe to call from
/// any number of concurrent in-flight requests; the host applies no
/// per-entity request queueing.
#[async_trait]
pub trait SpeechEntity: Send + Sync {
    /// Stable identifier, usually the owning config entry id
    fn unique_id(&self) -> &str;

    /// Display name, usually the owning config entry title
    fn name(&self) -> &str;

    /// Device registry metadata for this entity
    fn device_info(&self) -> DeviceInfo;

    /// UI category (default: none)
    fn entity_category(&self) -> Option<EntityCategory> {
        None
    }

    /// Option keys this entity accepts on a request
    fn supported_options(&self) -> &[&'static str];

    /// Languages the entity can synthesize, as locale tags
    fn supported_languages(&self) -> &[String];

    /// Language used when a request does not carry one
    fn default_language(&self) -> &str;

    /// Options applied when a request omits them
    fn default_options(&self) -> SpeechOptions;

    /// Voices available for `language`.
    ///
    /// Returns `None` when the entity has no voice catalog at all, letting
    /// the host distinguish "no catalog" from "no match" (empty vector).
    fn supported_voices(&self, language: &str) -> Option<Vec<Voice>>;

    /// Synthesize `message` and return audio in the resolved container.
    async fn synthesize(
        &self,
        message: &str,
        language: &str,
        options: &SpeechOptions,
    ) -> TtsResult<TtsAudio>;

    /// Play `message` on the given media-player targets.
    async fn announce(
        &self,
        targets: &[String],
        message: &str,
        options: &SpeechOptions,
    ) -> TtsResult<()>;
}
