//! Guided setup and options editing.
//!
//! Both forms collect the same fields and funnel through
//! [`validate_options`]; the setup step creates the config entry, the
//! options step replaces the entry options wholesale. Field errors are
//! reported as stable codes the host translates for display.

use crate::config::{
    validate_options, CONF_OUTPUT_FORMAT, CONF_PITCH, CONF_RATE, CONF_VOICE, CONF_VOLUME,
    DEFAULT_OUTPUT_FORMAT, DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOICE, DEFAULT_VOLUME,
};
use homespeak_tts::{ConfigEntry, OptionsMap};
use std::collections::BTreeMap;

/// Field errors keyed by option name
pub type FormErrors = BTreeMap<&'static str, &'static str>;

/// Fields collected by both forms, paired with their built-in defaults
const FORM_FIELDS: &[(&str, &str)] = &[
    (CONF_VOICE, DEFAULT_VOICE),
    (CONF_RATE, DEFAULT_RATE),
    (CONF_VOLUME, DEFAULT_VOLUME),
    (CONF_PITCH, DEFAULT_PITCH),
    (CONF_OUTPUT_FORMAT, DEFAULT_OUTPUT_FORMAT),
];

/// Outcome of one setup-flow step
#[derive(Debug)]
pub enum SetupFlowResult {
    /// Show (or re-show) the form; `defaults` pre-populates the fields
    Form {
        defaults: OptionsMap,
        errors: FormErrors,
    },
    /// Entry created with empty immutable data and the submitted options
    Create(ConfigEntry),
}

/// Outcome of one options-flow step
#[derive(Debug)]
pub enum OptionsFlowResult {
    Form {
        defaults: OptionsMap,
        errors: FormErrors,
    },
    /// Replace the entry options wholesale; the entry title is unchanged
    Update(OptionsMap),
}

/// Initial setup step. Call with `None` to get the empty form, then again
/// with the submitted input.
pub fn step_user(user_input: Option<&OptionsMap>) -> SetupFlowResult {
    let Some(input) = user_input else {
        return SetupFlowResult::Form {
            defaults: builtin_defaults(),
            errors: FormErrors::new(),
        };
    };

    let errors = validate_options(input);
    if !errors.is_empty() {
        return SetupFlowResult::Form {
            defaults: builtin_defaults(),
            errors,
        };
    }

    let voice = input
        .get(CONF_VOICE)
        .cloned()
        .unwrap_or_else(|| DEFAULT_VOICE.to_string());
    SetupFlowResult::Create(ConfigEntry::new(
        format!("Edge TTS ({})", voice),
        OptionsMap::new(),
        input.clone(),
    ))
}

/// Options edit step, pre-populated from the entry's current options
pub fn step_init(entry: &ConfigEntry, user_input: Option<&OptionsMap>) -> OptionsFlowResult {
    let Some(input) = user_input else {
        return OptionsFlowResult::Form {
            defaults: current_defaults(entry),
            errors: FormErrors::new(),
        };
    };

    let errors = validate_options(input);
    if !errors.is_empty() {
        return OptionsFlowResult::Form {
            defaults: current_defaults(entry),
            errors,
        };
    }

    OptionsFlowResult::Update(input.clone())
}

fn builtin_defaults() -> OptionsMap {
    FORM_FIELDS
        .iter()
        .map(|(key, default)| (key.to_string(), default.to_string()))
        .collect()
}

fn current_defaults(entry: &ConfigEntry) -> OptionsMap {
    FORM_FIELDS
        .iter()
        .map(|(key, default)| {
            let value = entry
                .options
                .get(*key)
                .cloned()
                .unwrap_or_else(|| default.to_string());
            (key.to_string(), value)
        })
        .collect()
}
