//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use unicode_normalization::char::canonical_combining_class;

use crate::classify::Tone;
use crate::normalize::is_letter_diacritic;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub script: ScriptSettings,
    pub holding: HoldingSettings,
    pub pause: PauseSettings,
    #[serde(default)]
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptSettings {
    pub bare_final_consonant: bool,
    pub hiatus_diaeresis: bool,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            bare_final_consonant: false,
            hiatus_diaeresis: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoldingSettings {
    pub word_boundary_lookback: bool,
}

impl Default for HoldingSettings {
    fn default() -> Self {
        Self {
            word_boundary_lookback: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PauseSettings {
    pub om: bool,
}

impl Default for PauseSettings {
    fn default() -> Self {
        Self { om: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeSettings {
    #[serde(default)]
    tone_variants: BTreeMap<String, Tone>,
    /// Parsed tone_variants: mark → tone.
    #[serde(skip)]
    tone_variants_parsed: Vec<(char, Tone)>,
}

impl NormalizeSettings {
    pub fn with_tone_variants(variants: Vec<(char, Tone)>) -> Self {
        Self {
            tone_variants: BTreeMap::new(),
            tone_variants_parsed: variants,
        }
    }

    /// Look up a user-supplied tone encoding.
    pub fn tone_variant(&self, mark: char) -> Option<Tone> {
        self.tone_variants_parsed
            .iter()
            .find_map(|(m, tone)| (*m == mark).then_some(*tone))
    }

    pub fn tone_variant_count(&self) -> usize {
        self.tone_variants_parsed.len()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.normalize.tone_variants_parsed = parse_tone_variants(&s.normalize.tone_variants)?;
    Ok(s)
}

fn parse_tone_variants(raw: &BTreeMap<String, Tone>) -> Result<Vec<(char, Tone)>, SettingsError> {
    let mut result = Vec::new();
    for (key, tone) in raw {
        let invalid = |reason: &str| SettingsError::InvalidValue {
            field: format!("normalize.tone_variants.{key:?}"),
            reason: reason.to_string(),
        };
        let mut chars = key.chars();
        let (Some(mark), None) = (chars.next(), chars.next()) else {
            return Err(invalid("key must be exactly one character"));
        };
        if canonical_combining_class(mark) == 0 {
            return Err(invalid("key must be a combining mark"));
        }
        if Tone::is_canonical_mark(mark) {
            return Err(invalid("canonical tone marks cannot be remapped"));
        }
        if is_letter_diacritic(mark) {
            return Err(invalid("letter diacritics cannot be remapped"));
        }
        result.push((mark, *tone));
    }
    Ok(result)
}
