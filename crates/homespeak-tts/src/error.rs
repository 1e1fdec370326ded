use thiserror::Error;

/// Host-facing speech errors
#[derive(Error, Debug)]
pub enum TtsError {
    /// The synthesis request failed. The message is the only detail shown to
    /// the user; providers log internals before raising this.
    #[error("speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// A host service call (media playback, device lookup) failed
    #[error("host service call failed: {0}")]
    HostService(String),

    /// Audio format conversion failed or the converter is unavailable
    #[error("audio conversion failed: {0}")]
    ConversionFailed(String),

    /// Lifecycle operation addressed an entry the integration does not hold
    #[error("unknown config entry: {0}")]
    UnknownEntry(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for speech operations
pub type TtsResult<T> = Result<T, TtsError>;
