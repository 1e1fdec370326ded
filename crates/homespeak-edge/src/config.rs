//! Option keys, built-in defaults, and the options validator.
//!
//! Rate and volume are signed-percentage strings, pitch is a signed-Hz
//! string. Validation returns stable error codes the host translates for
//! display; the same checks back both the setup form and the options form.

use homespeak_tts::OptionsMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Integration domain tag
pub const DOMAIN: &str = "edge_tts";

pub const CONF_VOICE: &str = "voice";
pub const CONF_RATE: &str = "rate";
pub const CONF_VOLUME: &str = "volume";
pub const CONF_PITCH: &str = "pitch";
pub const CONF_OUTPUT_FORMAT: &str = "output_format";
/// Request-only override for the output container
pub const ATTR_PREFERRED_FORMAT: &str = "preferred_format";

pub const DEFAULT_VOICE: &str = "en-US-EmmaMultilingualNeural";
pub const DEFAULT_RATE: &str = "+0%";
pub const DEFAULT_VOLUME: &str = "+0%";
pub const DEFAULT_PITCH: &str = "+0Hz";
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3";

/// Option keys accepted on a synthesis request
pub const SUPPORTED_OPTIONS: &[&str] = &[
    CONF_VOICE,
    CONF_RATE,
    CONF_VOLUME,
    CONF_PITCH,
    CONF_OUTPUT_FORMAT,
    ATTR_PREFERRED_FORMAT,
];

static RATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+%$").unwrap());
static PITCH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+Hz$").unwrap());

/// Validate submitted options and return field -> error-code mappings.
///
/// Keys absent from `input` are checked against the built-in defaults, and
/// present-but-empty values skip pattern checking. An empty result means the
/// input is valid.
pub fn validate_options(input: &OptionsMap) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();

    let rate = input.get(CONF_RATE).map(String::as_str).unwrap_or(DEFAULT_RATE);
    let volume = input
        .get(CONF_VOLUME)
        .map(String::as_str)
        .unwrap_or(DEFAULT_VOLUME);
    let pitch = input
        .get(CONF_PITCH)
        .map(String::as_str)
        .unwrap_or(DEFAULT_PITCH);

    if !rate.is_empty() && !RATE_RE.is_match(rate) {
        errors.insert(CONF_RATE, "invalid_rate");
    }
    if !volume.is_empty() && !RATE_RE.is_match(volume) {
        errors.insert(CONF_VOLUME, "invalid_volume");
    }
    if !pitch.is_empty() && !PITCH_RE.is_match(pitch) {
        errors.insert(CONF_PITCH, "invalid_pitch");
    }

    errors
}
