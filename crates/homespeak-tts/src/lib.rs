//! # Homespeak TTS
//!
//! Speech-entity contract of the Homespeak automation host.
//!
//! This crate defines the boundary between the host platform and a speech
//! provider plugin. A provider implements the capability set of
//! [`SpeechEntity`] (supported voices and languages, synthesize-to-audio,
//! announce-to-devices) and consumes the host services the platform hands it
//! ([`DeviceRegistry`], [`MediaPlayback`], [`AudioConverter`]).
//!
//! ## Architecture
//!
//! The crate follows a trait-based design:
//!
//! - `SpeechProvider`: marker trait identifying a provider implementation
//! - `SpeechEntity`: the exposed speech capabilities
//! - `host`: service traits the provider consumes
//! - `entry`: the host-persisted config-entry record and its lifecycle states
//!
//! Providers live in their own crates and are wired to a [`ConfigEntry`]
//! created by the provider's setup flow. The host owns persistence of the
//! entry's `data` and `options` mappings; this crate only defines their
//! shape.

pub mod entry;
pub mod error;
pub mod host;
pub mod provider;
pub mod speech;
pub mod types;
pub mod voice;

// Re-export main types
pub use entry::{ConfigEntry, EntryState, OptionsMap};
pub use error::{TtsError, TtsResult};
pub use host::{AudioConverter, DeviceRegistry, MediaPlayback};
pub use provider::SpeechProvider;
pub use speech::SpeechEntity;
pub use types::{AudioContainer, DeviceInfo, EntityCategory, SpeechOptions, TtsAudio};
pub use voice::Voice;
