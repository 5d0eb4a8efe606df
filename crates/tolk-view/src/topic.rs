use serde::Serialize;
use tolk_config::display::DisplayConfig;
use tolk_translator::{ContentRecord, Topic};

use crate::differs_from_locale;

/// Topic title as presented to a reader with `user_locale`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicTitleView {
    pub title: String,
    pub fancy_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub title_translated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_language: Option<String>,
    pub can_translate_title: bool,
}

impl TopicTitleView {
    pub fn build(topic: &Topic, user_locale: &str, settings: &DisplayConfig) -> Self {
        let title_language = topic.detected_lang().map(str::to_string);

        let can_translate_title = settings.translator_enabled
            && differs_from_locale(topic.detected_lang(), user_locale);

        let translated = (settings.translator_enabled
            && settings.show_topic_titles_in_user_locale)
            .then(|| topic.translated_text(user_locale))
            .flatten();

        match translated {
            Some(translated) => Self {
                title: translated.to_string(),
                fancy_title: translated.to_string(),
                original_title: Some(topic.title.clone()),
                title_translated: true,
                title_language,
                can_translate_title,
            },
            None => Self {
                title: topic.title.clone(),
                fancy_title: topic.fancy_title.clone(),
                original_title: None,
                title_translated: false,
                title_language,
                can_translate_title,
            },
        }
    }
}
