use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tolk_config::translator::{TranslatorConfig, UnsupportedTargetPolicy};

use crate::locale::map_locale;
use crate::{
    ContentRecord, ErrorBody, HttpTransport, LanguageCode, ProviderMetadata, ReqwestTransport,
    Translation, TranslationResult, Translator, TranslatorError,
};

/// Google Cloud Translation (v2) client that caches on the record
pub struct GoogleTranslator<T = ReqwestTransport> {
    transport: T,
    config: TranslatorConfig,
}

impl GoogleTranslator<ReqwestTransport> {
    pub fn from_config(config: TranslatorConfig) -> Result<Self, TranslatorError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_seconds))?;
        Ok(Self::new(config, transport))
    }
}

impl<T: HttpTransport> GoogleTranslator<T> {
    pub fn new(config: TranslatorConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn credential(&self) -> Result<&str, TranslatorError> {
        self.config
            .api_key()
            .ok_or(TranslatorError::MissingCredential)
    }

    /// POST `params` plus the API key and unwrap the `data` envelope
    async fn request<R>(&self, url: &str, params: &[(&str, &str)]) -> Result<R, TranslatorError>
    where
        R: DeserializeOwned,
    {
        let key = self.credential()?;

        let mut form = params.to_vec();
        form.push(("key", key));

        let response = self.transport.post_form(url, &form).await?;

        tracing::debug!(url, status = response.status, body = %response.body, "raw response from Google");

        if !response.is_success() {
            tracing::warn!(url, status = response.status, "Google Translate request failed");
            return Err(TranslatorError::Api {
                status: response.status,
                body: ErrorBody::parse(&response.body),
            });
        }

        let envelope: Envelope<R> = serde_json::from_str(&response.body)
            .map_err(|e| TranslatorError::Parse(format!("Failed to parse response: {e}")))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl<T: HttpTransport> Translator for GoogleTranslator<T> {
    async fn detect_language(
        &self,
        record: &mut dyn ContentRecord,
    ) -> Result<LanguageCode, TranslatorError> {
        if let Some(lang) = record.detected_lang() {
            tracing::debug!(lang, "detected language served from cache");
            return Ok(lang.to_string());
        }

        let text = record.truncated_text(self.config.max_length);
        let data: DetectData = self
            .request(&self.config.detect_url, &[("q", text)])
            .await?;

        let best = data
            .detections
            .into_iter()
            .next()
            .and_then(most_confident)
            .ok_or_else(|| TranslatorError::Parse("No detections in response".to_string()))?;

        tracing::debug!(
            lang = %best.language,
            confidence = best.confidence,
            reliable = best.is_reliable,
            "language detected"
        );

        record.set_detected_lang(&best.language);
        Ok(best.language)
    }

    async fn is_target_supported(
        &self,
        source: &str,
        target: &str,
    ) -> Result<bool, TranslatorError> {
        let Some(mapped) = map_locale(target) else {
            return Ok(false);
        };

        let data: LanguagesData = self
            .request(&self.config.languages_url, &[("target", mapped)])
            .await?;

        Ok(data.languages.iter().any(|l| l.language == source))
    }

    async fn translate(
        &self,
        record: &mut dyn ContentRecord,
        target: &str,
    ) -> Result<TranslationResult, TranslatorError> {
        let detected = self.detect_language(record).await?;

        let Some(mapped) = map_locale(target) else {
            tracing::warn!(locale = target, "no Google language for locale");
            return match self.config.unsupported_target {
                UnsupportedTargetPolicy::Skip => Ok(TranslationResult::Unsupported),
                UnsupportedTargetPolicy::Error => {
                    Err(TranslatorError::UnsupportedTarget(target.to_string()))
                }
            };
        };

        tracing::debug!(source = %detected, provider_target = mapped, "translating");

        if detected == mapped {
            return Ok(TranslationResult::SameLanguage);
        }

        if let Some(cached) = record.translated_text(target) {
            tracing::debug!(locale = target, "translation served from cache");
            return Ok(TranslationResult::Translated(Translation {
                detected_lang: detected,
                text: cached.to_string(),
            }));
        }

        let text = record.truncated_text(self.config.max_length);
        let data: TranslateData = self
            .request(
                &self.config.translate_url,
                &[("q", text), ("source", detected.as_str()), ("target", mapped)],
            )
            .await?;

        let translated = data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslatorError::Parse("No translation in response".to_string()))?;

        record.set_translated_text(target, &translated);
        tracing::info!(source = %detected, locale = target, "translated text cached");

        Ok(TranslationResult::Translated(Translation {
            detected_lang: detected,
            text: translated,
        }))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
            requires_api_key: true,
            free_tier_available: false,
        }
    }
}

/// Highest confidence wins; the earlier candidate is kept on ties
fn most_confident(candidates: Vec<Detection>) -> Option<Detection> {
    candidates
        .into_iter()
        .fold(None, |best: Option<Detection>, candidate| match best {
            Some(best) if best.confidence >= candidate.confidence => Some(best),
            _ => Some(candidate),
        })
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct DetectData {
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Detection {
    language: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    is_reliable: bool,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

#[derive(Deserialize)]
struct LanguagesData {
    languages: Vec<Language>,
}

#[derive(Deserialize)]
struct Language {
    language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(language: &str, confidence: f64) -> Detection {
        Detection {
            language: language.to_string(),
            confidence,
            is_reliable: false,
        }
    }

    #[test]
    fn test_most_confident_picks_max() {
        let best = most_confident(vec![
            detection("en", 0.18),
            detection("de", 0.73),
            detection("nl", 0.09),
        ]);
        assert_eq!(best.map(|d| d.language).as_deref(), Some("de"));
    }

    #[test]
    fn test_most_confident_keeps_first_on_tie() {
        let best = most_confident(vec![detection("pt", 0.5), detection("es", 0.5)]);
        assert_eq!(best.map(|d| d.language).as_deref(), Some("pt"));
    }

    #[test]
    fn test_most_confident_empty() {
        assert!(most_confident(Vec::new()).is_none());
    }
}
