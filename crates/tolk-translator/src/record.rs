use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DETECTED_LANG_FIELD: &str = "detected_lang";
pub const DETECTED_TITLE_LANG_FIELD: &str = "detected_title_lang";
/// Map of host target locale to translated text
pub const TRANSLATED_FIELD: &str = "translated_text";

/// Per-record key/value cache
pub type CustomFields = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Post,
    Topic,
}

/// Content that can be translated and carries its own translation cache
pub trait ContentRecord: Send + Sync {
    fn kind(&self) -> RecordKind;

    /// Full translatable text (post body or topic title)
    fn text(&self) -> &str;

    fn custom_fields(&self) -> &CustomFields;

    fn custom_fields_mut(&mut self) -> &mut CustomFields;

    /// Text cut to at most `max_len` characters
    fn truncated_text(&self, max_len: usize) -> &str {
        let text = self.text();
        match text.char_indices().nth(max_len) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// Custom field holding the detected source language
    fn detected_lang_field(&self) -> &'static str {
        match self.kind() {
            RecordKind::Post => DETECTED_LANG_FIELD,
            RecordKind::Topic => DETECTED_TITLE_LANG_FIELD,
        }
    }

    fn detected_lang(&self) -> Option<&str> {
        self.custom_fields()
            .get(self.detected_lang_field())
            .and_then(Value::as_str)
    }

    fn set_detected_lang(&mut self, lang: &str) {
        let field = self.detected_lang_field();
        self.custom_fields_mut()
            .insert(field.to_string(), Value::String(lang.to_string()));
    }

    fn translated_text(&self, target: &str) -> Option<&str> {
        self.custom_fields()
            .get(TRANSLATED_FIELD)
            .and_then(|translations| translations.get(target))
            .and_then(Value::as_str)
    }

    /// Store a translation, keeping translations for other targets
    fn set_translated_text(&mut self, target: &str, text: &str) {
        let fields = self.custom_fields_mut();
        let entry = fields
            .entry(TRANSLATED_FIELD.to_string())
            .or_insert_with(|| Value::Object(Default::default()));

        if !entry.is_object() {
            *entry = Value::Object(Default::default());
        }

        if let Value::Object(translations) = entry {
            translations.insert(target.to_string(), Value::String(text.to_string()));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub raw: String,
    /// Rendered HTML; this is what gets translated
    pub cooked: String,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl Post {
    pub fn new(id: u64, cooked: impl Into<String>) -> Self {
        let cooked = cooked.into();
        Self {
            id,
            raw: cooked.clone(),
            cooked,
            custom_fields: CustomFields::new(),
        }
    }
}

impl ContentRecord for Post {
    fn kind(&self) -> RecordKind {
        RecordKind::Post
    }

    fn text(&self) -> &str {
        &self.cooked
    }

    fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    fn custom_fields_mut(&mut self) -> &mut CustomFields {
        &mut self.custom_fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    /// HTML-escaped title as shown in lists
    #[serde(default)]
    pub fancy_title: String,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl Topic {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            fancy_title: title.clone(),
            title,
            custom_fields: CustomFields::new(),
        }
    }
}

impl ContentRecord for Topic {
    fn kind(&self) -> RecordKind {
        RecordKind::Topic
    }

    fn text(&self) -> &str {
        &self.title
    }

    fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    fn custom_fields_mut(&mut self) -> &mut CustomFields {
        &mut self.custom_fields
    }
}
