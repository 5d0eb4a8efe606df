use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_translate_url() -> String {
    "https://www.googleapis.com/language/translate/v2".to_string()
}

fn default_detect_url() -> String {
    "https://www.googleapis.com/language/translate/v2/detect".to_string()
}

fn default_languages_url() -> String {
    "https://www.googleapis.com/language/translate/v2/languages".to_string()
}

fn default_max_length() -> usize {
    5000
}

fn default_timeout_seconds() -> u64 {
    30
}

/// What `translate` does when the target locale has no provider mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedTargetPolicy {
    /// Return a no-op result
    #[default]
    Skip,
    /// Fail with an "unsupported target" error
    Error,
}

impl FromStr for UnsupportedTargetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown unsupported-target policy: {other}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Google Cloud API key; empty means unset
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_translate_url")]
    pub translate_url: String,
    #[serde(default = "default_detect_url")]
    pub detect_url: String,
    #[serde(default = "default_languages_url")]
    pub languages_url: String,
    /// Texts are cut to this many characters before being sent
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default)]
    pub unsupported_target: UnsupportedTargetPolicy,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var("TRANSLATOR_GOOGLE_API_KEY").unwrap_or_default(),
            translate_url: env::var("TRANSLATOR_TRANSLATE_URL")
                .unwrap_or(defaults.translate_url),
            detect_url: env::var("TRANSLATOR_DETECT_URL").unwrap_or(defaults.detect_url),
            languages_url: env::var("TRANSLATOR_LANGUAGES_URL")
                .unwrap_or(defaults.languages_url),
            max_length: env_parse("TRANSLATOR_MAX_LENGTH").unwrap_or(defaults.max_length),
            unsupported_target: env_parse("TRANSLATOR_UNSUPPORTED_TARGET")
                .unwrap_or(defaults.unsupported_target),
            timeout_seconds: env_parse("TRANSLATOR_TIMEOUT_SECONDS")
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// The API key, or `None` when it was never set
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            translate_url: default_translate_url(),
            detect_url: default_detect_url(),
            languages_url: default_languages_url(),
            max_length: default_max_length(),
            unsupported_target: UnsupportedTargetPolicy::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
