mod error;
mod google;
pub mod locale;
pub mod record;
pub mod transport;

#[cfg(test)]
mod tests;

pub use error::{ErrorBody, TranslatorError};
pub use google::GoogleTranslator;
pub use record::{ContentRecord, Post, RecordKind, Topic};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Detect the source language of a record, reusing the cached value when present
    async fn detect_language(
        &self,
        record: &mut dyn ContentRecord,
    ) -> Result<LanguageCode, TranslatorError>;

    /// Whether the provider can translate `source` into the host locale `target`
    async fn is_target_supported(&self, source: &str, target: &str)
    -> Result<bool, TranslatorError>;

    /// Translate a record into the host locale `target`, caching the result on the record
    async fn translate(
        &self,
        record: &mut dyn ContentRecord,
        target: &str,
    ) -> Result<TranslationResult, TranslatorError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub detected_lang: LanguageCode,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Translated(Translation),
    /// Detected source already matches the target
    SameLanguage,
    /// Target locale has no provider mapping
    Unsupported,
}

impl TranslationResult {
    pub fn translation(&self) -> Option<&Translation> {
        match self {
            Self::Translated(translation) => Some(translation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}
