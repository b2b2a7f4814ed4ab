use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Default announcement language.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

/// Default speech rate; 1.0 is the platform's baseline.
pub const DEFAULT_RATE: f32 = 1.5;

/// How keystrokes inside text-entry elements are announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeystrokeProfile {
    /// Echo printable characters as typed; `Enter` reads back the whole
    /// field. Named keys other than `Enter` stay silent.
    CharEcho,
    /// Speak the localized name of every key, printable or not.
    #[default]
    KeyNames,
}

/// Engine configuration.
///
/// # Example
///
/// ```rust
/// use cheongeum::config::{EngineConfigBuilder, KeystrokeProfile};
///
/// let config = EngineConfigBuilder::default()
///     .language("en-US")
///     .rate(1.2)
///     .profile(KeystrokeProfile::CharEcho)
///     .build()?;
/// assert_eq!(config.language, "en-US");
/// # Ok::<(), cheongeum::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, build_fn(validate = "Self::validate", error = "EngineError"))]
#[serde(default)]
pub struct EngineConfig {
    /// BCP 47 language tag passed with every utterance.
    #[builder(setter(into))]
    pub language: String,
    /// Speech rate multiplier passed with every utterance.
    pub rate: f32,
    /// Keystroke announcement policy.
    pub profile: KeystrokeProfile,
    /// Relabel carousel previous/next controls at initialization.
    pub relabel_carousel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            rate: DEFAULT_RATE,
            profile: KeystrokeProfile::default(),
            relabel_carousel: true,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        log::info!("Loading engine configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        check_language(&self.language)?;
        check_rate(self.rate)
    }
}

impl EngineConfigBuilder {
    fn validate(&self) -> Result<(), EngineError> {
        if let Some(language) = &self.language {
            check_language(language)?;
        }
        if let Some(rate) = self.rate {
            check_rate(rate)?;
        }
        Ok(())
    }
}

pub(crate) fn check_language(language: &str) -> Result<(), EngineError> {
    if language.trim().is_empty() {
        return Err(EngineError::BlankLanguage);
    }
    Ok(())
}

pub(crate) fn check_rate(rate: f32) -> Result<(), EngineError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(EngineError::InvalidRate(rate));
    }
    Ok(())
}
