use crate::speech::SpeechEntity;

/// Marker trait for speech providers
///
/// Combines the entity capability set with provider identity. The host uses
/// the identity for diagnostics only.
pub trait SpeechProvider: SpeechEntity {
    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the provider version
    fn provider_version(&self) -> &str {
        "unknown"
    }
}
