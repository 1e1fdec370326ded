//! Announce dispatch.
//!
//! Sonos players cannot consume the host's HTTP-streamed announcements, so
//! targets owned by the `sonos` platform get synthesized audio written to a
//! local file and played from that path. All other targets go through the
//! host's standard announce pipeline unchanged.

use crate::entity::EdgeSpeechEntity;
use homespeak_tts::{SpeechEntity, SpeechOptions, TtsResult};
use log::debug;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Platform tag of the brand that needs local-file delivery
pub const FILE_DELIVERY_PLATFORM: &str = "sonos";

/// How long a written announce file stays on disk before cleanup
pub const CLEANUP_DELAY: Duration = Duration::from_secs(600);

pub(crate) async fn dispatch(
    entity: &EdgeSpeechEntity,
    targets: &[String],
    message: &str,
    options: &SpeechOptions,
) -> TtsResult<()> {
    let host = entity.host();

    let (file_targets, stream_targets): (Vec<String>, Vec<String>) =
        targets.iter().cloned().partition(|entity_id| {
            host.registry.platform_of(entity_id).as_deref() == Some(FILE_DELIVERY_PLATFORM)
        });

    if !stream_targets.is_empty() {
        host.playback
            .announce(&stream_targets, message, options)
            .await?;
    }

    if !file_targets.is_empty() {
        let merged = options.merged_onto(&entity.default_options());
        let audio = entity
            .synthesize(message, entity.default_language(), &merged)
            .await?;

        let path = std::env::temp_dir().join(format!(
            "homespeak_{}.{}",
            Uuid::new_v4(),
            audio.container
        ));
        tokio::fs::write(&path, &audio.bytes).await?;

        let result = host.playback.play_file(&file_targets, &path).await;
        // Cleanup runs regardless of whether playback succeeded.
        schedule_cleanup(path, CLEANUP_DELAY);
        result?;
    }

    Ok(())
}

/// One-shot deferred deletion. Detached: an entity reload or unload before
/// the delay elapses does not cancel it, and a file that is already gone
/// only produces a debug log.
fn schedule_cleanup(path: PathBuf, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(err) = tokio::fs::remove_file(&path).await {
            debug!("Announce file {} already cleaned up: {}", path.display(), err);
        }
    });
}
