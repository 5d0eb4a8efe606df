use serde::{Deserialize, Serialize};

use crate::env_flag;

/// Settings consulted when rendering posts and topics
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub translator_enabled: bool,
    /// Replace topic titles with their cached translation for the reader's locale
    pub show_topic_titles_in_user_locale: bool,
}

impl DisplayConfig {
    pub fn from_env() -> Self {
        Self {
            translator_enabled: env_flag("TRANSLATOR_ENABLED").unwrap_or(false),
            show_topic_titles_in_user_locale: env_flag(
                "TRANSLATOR_SHOW_TOPIC_TITLES_IN_USER_LOCALE",
            )
            .unwrap_or(false),
        }
    }
}
