//! Error types for the Edge TTS provider

use thiserror::Error;

/// Edge TTS provider errors.
///
/// These stay internal to the provider: the entity boundary logs the detail
/// and surfaces a single generic synthesis failure to the host.
#[derive(Error, Debug)]
pub enum EdgeTtsError {
    /// The synthesis stream completed without a single audio chunk
    #[error("No audio received from Edge TTS")]
    NoAudio,

    /// Connection, protocol, or synthesis error from the Edge service
    #[error("Edge TTS backend error: {0}")]
    Backend(String),

    /// A prosody option string failed to parse at the backend seam
    #[error("Invalid prosody value: {0}")]
    InvalidProsody(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Edge TTS provider operations
pub type EdgeResult<T> = std::result::Result<T, EdgeTtsError>;

impl From<msedge_tts::error::Error> for EdgeTtsError {
    fn from(err: msedge_tts::error::Error) -> Self {
        EdgeTtsError::Backend(err.to_string())
    }
}
