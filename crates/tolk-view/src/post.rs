use serde::Serialize;
use tolk_config::display::DisplayConfig;
use tolk_translator::{ContentRecord, Post};

use crate::differs_from_locale;

/// Translation state of a post for a reader with `user_locale`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub can_translate: bool,
    /// Enabled but the post's language is still unknown; the host should schedule detection
    pub needs_detection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
}

impl PostView {
    pub fn build(post: &Post, user_locale: &str, settings: &DisplayConfig) -> Self {
        if !settings.translator_enabled {
            return Self {
                can_translate: false,
                needs_detection: false,
                translated_text: None,
            };
        }

        let detected = post.detected_lang();

        Self {
            can_translate: differs_from_locale(detected, user_locale),
            needs_detection: detected.is_none(),
            translated_text: post.translated_text(user_locale).map(str::to_string),
        }
    }
}
