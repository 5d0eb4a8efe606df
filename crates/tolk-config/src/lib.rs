use std::env;

use serde::{Deserialize, Serialize};

use self::display::DisplayConfig;
use self::translator::TranslatorConfig;

pub mod display;
pub mod translator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub display: DisplayConfig,

    /// Host locale used when a command does not name one
    pub default_locale: String,
    /// JSON file holding posts, topics and their custom fields
    pub store_path: String,
}

impl Config {
    pub fn new() -> Self {
        let default_locale =
            env::var("TRANSLATOR_DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        let store_path =
            env::var("TOLK_STORE_PATH").unwrap_or_else(|_| "tolk-store.json".to_string());

        Config {
            translator: TranslatorConfig::from_env(),
            display: DisplayConfig::from_env(),

            default_locale,
            store_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            display: DisplayConfig::default(),
            default_locale: "en".to_string(),
            store_path: "tolk-store.json".to_string(),
        }
    }
}

/// Parse a boolean env flag, accepting `1`/`0` alongside `true`/`false`
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| match v.trim() {
        "1" => Some(true),
        "0" => Some(false),
        other => other.parse().ok(),
    })
}

pub(crate) fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
