//! # Homespeak Edge
//!
//! Microsoft Edge neural TTS provider for the Homespeak automation host.
//!
//! The provider exposes the Edge Read Aloud voices as a [`SpeechEntity`]:
//! the host hands it a message plus speech options (voice, rate, volume,
//! pitch, output format, language) and gets audio bytes back in the
//! requested container. Defaults are configured through a guided setup form
//! and editable through an options form; Sonos media players, which cannot
//! consume HTTP-streamed audio, are served from a temporary local file
//! instead.
//!
//! ## Architecture
//!
//! - `config`: option keys, built-in defaults, and the options validator
//! - `flow`: the setup and options-edit forms
//! - `lifecycle`: config-entry setup/unload/reload and options migration
//! - `catalog`: voice catalog fetch and language -> voice resolution
//! - `backend`: seam over the `msedge-tts` crate (voice listing, streaming
//!   synthesis)
//! - `entity`: the speech entity itself (option precedence, chunk
//!   accumulation, ID3v2 strip, wav conversion fallback)
//! - `announce`: media-player dispatch with local-file delivery for Sonos
//! - `audio`: ID3v2 stripping and the ffmpeg-backed converter
//!
//! The wire protocol to the Edge service lives entirely inside `msedge-tts`;
//! failures degrade per request (no retries) and a missing voice catalog
//! degrades resolution to the configured defaults rather than failing setup.
//!
//! [`SpeechEntity`]: homespeak_tts::SpeechEntity

pub mod announce;
pub mod audio;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod flow;
pub mod lifecycle;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types
pub use audio::FfmpegConverter;
pub use backend::{EdgeBackend, SynthChunk, SynthesisBackend, SynthesisParams};
pub use catalog::CatalogVoice;
pub use entity::{EdgeSpeechEntity, HostHandles};
pub use error::{EdgeResult, EdgeTtsError};
pub use flow::{step_init, step_user, OptionsFlowResult, SetupFlowResult};
pub use lifecycle::EdgeTtsIntegration;
