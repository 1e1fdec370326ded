//! Config-entry lifecycle: setup, unload, reload, and options updates.
//!
//! An entry moves `unloaded -> loading -> loaded` on setup and back to
//! `unloaded` on unload or removal. Option changes replace the entry options
//! wholesale and trigger a full reload, which also refetches the voice
//! catalog.

use crate::backend::SynthesisBackend;
use crate::catalog;
use crate::config::CONF_OUTPUT_FORMAT;
use crate::entity::{EdgeSpeechEntity, HostHandles};
use homespeak_tts::{ConfigEntry, EntryState, OptionsMap, TtsError, TtsResult};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The Edge TTS integration: drives config entries through their lifecycle
/// and owns the speech entities created from them.
pub struct EdgeTtsIntegration {
    backend: Arc<dyn SynthesisBackend>,
    host: HostHandles,
    entities: Mutex<HashMap<String, Arc<EdgeSpeechEntity>>>,
}

impl EdgeTtsIntegration {
    pub fn new(backend: Arc<dyn SynthesisBackend>, host: HostHandles) -> Self {
        Self {
            backend,
            host,
            entities: Mutex::new(HashMap::new()),
        }
    }

    /// Set up a config entry: migrate legacy options, fetch the voice
    /// catalog, and register the speech entity.
    ///
    /// A failed catalog fetch is not fatal; the entity comes up with an
    /// empty catalog and resolves everything to its configured defaults.
    pub async fn setup_entry(&self, entry: &mut ConfigEntry) -> TtsResult<Arc<EdgeSpeechEntity>> {
        entry.state = EntryState::Loading;

        // Early versions stored the output format per entry; it now rides on
        // each request instead. The host persists the updated options.
        if entry.options.remove(CONF_OUTPUT_FORMAT).is_some() {
            debug!(
                "Dropped legacy {} option from entry {}",
                CONF_OUTPUT_FORMAT, entry.entry_id
            );
        }

        let voices = catalog::fetch_voices(self.backend.as_ref()).await;
        let entity = Arc::new(EdgeSpeechEntity::new(
            entry,
            voices,
            Arc::clone(&self.backend),
            self.host.clone(),
        ));
        self.entities
            .lock()
            .await
            .insert(entry.entry_id.clone(), Arc::clone(&entity));
        entry.state = EntryState::Loaded;
        Ok(entity)
    }

    /// Unload a config entry, dropping its entity
    pub async fn unload_entry(&self, entry: &mut ConfigEntry) -> TtsResult<()> {
        if self
            .entities
            .lock()
            .await
            .remove(&entry.entry_id)
            .is_none()
        {
            return Err(TtsError::UnknownEntry(entry.entry_id.clone()));
        }
        entry.state = EntryState::Unloaded;
        Ok(())
    }

    /// Tear down and set up again, refetching the voice catalog
    pub async fn reload_entry(&self, entry: &mut ConfigEntry) -> TtsResult<Arc<EdgeSpeechEntity>> {
        self.unload_entry(entry).await?;
        self.setup_entry(entry).await
    }

    /// Options-change listener: replace the entry options wholesale and
    /// reload
    pub async fn update_options(
        &self,
        entry: &mut ConfigEntry,
        options: OptionsMap,
    ) -> TtsResult<Arc<EdgeSpeechEntity>> {
        entry.options = options;
        self.reload_entry(entry).await
    }

    /// Remove an entry: same teardown as unload; the host discards the
    /// record afterwards
    pub async fn remove_entry(&self, entry: &mut ConfigEntry) -> TtsResult<()> {
        self.unload_entry(entry).await
    }

    /// Entity registered for an entry id, if the entry is loaded
    pub async fn entity(&self, entry_id: &str) -> Option<Arc<EdgeSpeechEntity>> {
        self.entities.lock().await.get(entry_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogVoice;
    use crate::config::{CONF_VOICE, DEFAULT_VOICE};
    use crate::testutil::{entry_with_options, host_handles, ScriptedBackend, ScriptedConverter};
    use homespeak_tts::SpeechEntity;

    fn integration(backend: ScriptedBackend) -> EdgeTtsIntegration {
        EdgeTtsIntegration::new(
            Arc::new(backend),
            host_handles(&[], ScriptedConverter::Unavailable),
        )
    }

    fn catalog() -> Vec<CatalogVoice> {
        vec![CatalogVoice {
            short_name: "en-US-EmmaNeural".to_string(),
            locale: "en-US".to_string(),
            ..Default::default()
        }]
    }

    #[tokio::test]
    async fn test_setup_and_unload_drive_entry_state() {
        let integration = integration(ScriptedBackend::new(catalog(), vec![]));
        let mut entry = entry_with_options(&[]);

        let entity = integration.setup_entry(&mut entry).await.unwrap();
        assert_eq!(entry.state, EntryState::Loaded);
        assert_eq!(entity.supported_languages(), &["en-US"]);
        assert!(integration.entity(&entry.entry_id).await.is_some());

        integration.unload_entry(&mut entry).await.unwrap();
        assert_eq!(entry.state, EntryState::Unloaded);
        assert!(integration.entity(&entry.entry_id).await.is_none());
    }

    #[tokio::test]
    async fn test_setup_survives_catalog_fetch_failure() {
        let integration = integration(ScriptedBackend::with_failing_listing());
        let mut entry = entry_with_options(&[]);

        let entity = integration.setup_entry(&mut entry).await.unwrap();
        assert_eq!(entry.state, EntryState::Loaded);
        // Degraded: only the default voice's locale is advertised.
        assert_eq!(entity.supported_languages(), &["en-US"]);
        assert!(entity.supported_voices("en").is_none());
    }

    #[tokio::test]
    async fn test_setup_migrates_legacy_output_format() {
        let integration = integration(ScriptedBackend::new(vec![], vec![]));
        let mut entry = entry_with_options(&[(CONF_OUTPUT_FORMAT, "wav"), (CONF_VOICE, DEFAULT_VOICE)]);

        integration.setup_entry(&mut entry).await.unwrap();
        assert!(!entry.options.contains_key(CONF_OUTPUT_FORMAT));
        assert!(entry.options.contains_key(CONF_VOICE));
    }

    #[tokio::test]
    async fn test_unload_unknown_entry_fails() {
        let integration = integration(ScriptedBackend::new(vec![], vec![]));
        let mut entry = entry_with_options(&[]);

        let err = integration.unload_entry(&mut entry).await.unwrap_err();
        assert!(matches!(err, TtsError::UnknownEntry(_)));
    }

    #[tokio::test]
    async fn test_update_options_reloads_with_new_defaults() {
        let integration = integration(ScriptedBackend::new(vec![], vec![]));
        let mut entry = entry_with_options(&[]);

        let entity = integration.setup_entry(&mut entry).await.unwrap();
        assert_eq!(entity.default_options().voice.as_deref(), Some(DEFAULT_VOICE));

        let mut options = OptionsMap::new();
        options.insert(CONF_VOICE.to_string(), "fr-FR-HenriNeural".to_string());
        let reloaded = integration.update_options(&mut entry, options).await.unwrap();

        assert_eq!(entry.state, EntryState::Loaded);
        assert_eq!(
            reloaded.default_options().voice.as_deref(),
            Some("fr-FR-HenriNeural")
        );
        assert_eq!(reloaded.default_language(), "fr-FR");
    }
}
