//! Voice catalog handling: fetch, locale derivation, and language -> voice
//! resolution.
//!
//! The catalog is fetched once per entity lifetime and read-only afterwards.
//! Matching is case-insensitive on locales; resolution is first-match-wins
//! with no ranking among regional variants of the same language.

use crate::backend::SynthesisBackend;
use homespeak_tts::Voice;
use log::warn;
use serde::{Deserialize, Serialize};

/// One entry of the fetched voice catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVoice {
    /// Identifier used by the synthesis call, e.g. `en-US-EmmaNeural`
    #[serde(rename = "ShortName")]
    pub short_name: String,
    /// Language-region tag, e.g. `en-US`
    #[serde(rename = "Locale", default)]
    pub locale: String,
    #[serde(rename = "FriendlyName", default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CatalogVoice {
    /// Display label: friendly name, then raw name, then the short name
    pub fn display_name(&self) -> &str {
        self.friendly_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.short_name)
    }
}

/// Fetch available voices from the Edge service.
///
/// Never propagates a failure: an unreachable service degrades to an empty
/// catalog, which makes voice and locale resolution fall back to the
/// configured defaults.
pub async fn fetch_voices(backend: &dyn SynthesisBackend) -> Vec<CatalogVoice> {
    match backend.list_voices().await {
        Ok(voices) => voices,
        Err(err) => {
            warn!("Failed to fetch Edge TTS voices: {}", err);
            Vec::new()
        }
    }
}

/// Extract the locale from a voice short name; falls back to `en-US` for
/// names without a language-region prefix.
pub fn locale_from_voice(voice: &str) -> String {
    let parts: Vec<&str> = voice.split('-').collect();
    if parts.len() >= 2 {
        format!("{}-{}", parts[0], parts[1])
    } else {
        "en-US".to_string()
    }
}

/// `language` must already be lowercased
fn locale_matches(locale: &str, language: &str) -> bool {
    let locale = locale.to_lowercase();
    locale.starts_with(language) || locale.split('-').next() == Some(language)
}

/// Pick the first voice matching the requested language code
pub fn voice_for_language<'a>(catalog: &'a [CatalogVoice], language: &str) -> Option<&'a str> {
    if catalog.is_empty() {
        return None;
    }
    let language = language.to_lowercase();
    catalog
        .iter()
        .find(|voice| locale_matches(&voice.locale, &language))
        .map(|voice| voice.short_name.as_str())
}

/// All voices matching the requested language, projected for the host.
///
/// Returns `None` (not an empty vector) when the catalog itself is empty, so
/// the caller can tell "no catalog" apart from "no match".
pub fn voices_for_language(catalog: &[CatalogVoice], language: &str) -> Option<Vec<Voice>> {
    if catalog.is_empty() {
        return None;
    }
    let language = language.to_lowercase();
    Some(
        catalog
            .iter()
            .filter(|voice| locale_matches(&voice.locale, &language))
            .map(|voice| Voice::new(voice.short_name.clone(), voice.display_name()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogVoice> {
        vec![
            CatalogVoice {
                short_name: "en-US-Emma".to_string(),
                locale: "en-US".to_string(),
                ..Default::default()
            },
            CatalogVoice {
                short_name: "en-GB-Sonia".to_string(),
                locale: "en-GB".to_string(),
                friendly_name: Some("Sonia (United Kingdom)".to_string()),
                ..Default::default()
            },
            CatalogVoice {
                short_name: "fr-FR-Henri".to_string(),
                locale: "fr-FR".to_string(),
                name: Some("Henri".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_locale_from_voice() {
        assert_eq!(locale_from_voice("en-US-EmmaMultilingualNeural"), "en-US");
        assert_eq!(locale_from_voice("fr-FR-HenriNeural"), "fr-FR");
        assert_eq!(locale_from_voice("x"), "en-US");
    }

    #[test]
    fn test_voice_for_language_first_match_wins() {
        assert_eq!(voice_for_language(&catalog(), "en"), Some("en-US-Emma"));
        assert_eq!(voice_for_language(&catalog(), "en-GB"), Some("en-GB-Sonia"));
        assert_eq!(voice_for_language(&catalog(), "FR"), Some("fr-FR-Henri"));
        assert_eq!(voice_for_language(&catalog(), "de"), None);
    }

    #[test]
    fn test_empty_catalog_resolves_nothing() {
        assert_eq!(voice_for_language(&[], "en"), None);
        assert!(voices_for_language(&[], "en").is_none());
    }

    #[test]
    fn test_voices_for_language_projection() {
        let voices = voices_for_language(&catalog(), "en").unwrap();
        assert_eq!(
            voices,
            vec![
                Voice::new("en-US-Emma", "en-US-Emma"),
                Voice::new("en-GB-Sonia", "Sonia (United Kingdom)"),
            ]
        );

        let french = voices_for_language(&catalog(), "fr").unwrap();
        assert_eq!(french, vec![Voice::new("fr-FR-Henri", "Henri")]);

        let none = voices_for_language(&catalog(), "de").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_catalog_voice_deserializes_service_fields() {
        let voice: CatalogVoice = serde_json::from_str(
            r#"{"ShortName":"en-US-Emma","Locale":"en-US","FriendlyName":"Emma"}"#,
        )
        .unwrap();
        assert_eq!(voice.short_name, "en-US-Emma");
        assert_eq!(voice.locale, "en-US");
        assert_eq!(voice.display_name(), "Emma");
    }
}
