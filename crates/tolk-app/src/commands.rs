use std::path::Path;

use anyhow::{Context, Result};
use tolk_config::Config;
use tolk_translator::locale::supported_locales;
use tolk_translator::{GoogleTranslator, TranslationResult, Translator};
use tolk_view::{PostView, TopicTitleView};

use crate::cli::{Command, RecordRef};
use crate::store::RecordStore;

pub async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Locales => {
            for (host, provider) in supported_locales() {
                println!("{host}\t{provider}");
            }
            Ok(())
        }
        Command::Supported { source, target } => {
            let translator = translator(config)?;
            let supported = translator.is_target_supported(&source, &target).await?;
            println!("{supported}");
            Ok(())
        }
        Command::Detect { record } => detect(config, record.into()).await,
        Command::Translate { record, target } => {
            let target = target.unwrap_or_else(|| config.default_locale.clone());
            translate(config, record.into(), &target).await
        }
        Command::Show { record, locale } => {
            let locale = locale.unwrap_or_else(|| config.default_locale.clone());
            show(config, record.into(), &locale)
        }
    }
}

fn translator(config: &Config) -> Result<GoogleTranslator> {
    let translator = GoogleTranslator::from_config(config.translator.clone())
        .context("Failed to build HTTP client")?;
    tracing::debug!("Using provider {}", translator.metadata().name);
    Ok(translator)
}

async fn detect(config: &Config, record: RecordRef) -> Result<()> {
    let path = Path::new(&config.store_path);
    let mut store = RecordStore::load(path)?;
    let translator = translator(config)?;

    let lang = translator
        .detect_language(store.record_mut(record)?)
        .await
        .with_context(|| format!("Failed to detect language of {record:?}"))?;

    store.save(path)?;
    println!("{lang}");
    Ok(())
}

async fn translate(config: &Config, record: RecordRef, target: &str) -> Result<()> {
    let path = Path::new(&config.store_path);
    let mut store = RecordStore::load(path)?;
    let translator = translator(config)?;

    let result = translator
        .translate(store.record_mut(record)?, target)
        .await
        .with_context(|| format!("Failed to translate {record:?} into {target}"))?;

    // Detection is cached even when no translation follows
    store.save(path)?;

    match result {
        TranslationResult::Translated(translation) => {
            tracing::info!("Translated from {}", translation.detected_lang);
            println!("{}", translation.text);
        }
        TranslationResult::SameLanguage => {
            tracing::info!("{record:?} is already in {target}, nothing to translate");
        }
        TranslationResult::Unsupported => {
            tracing::warn!("{target} is not a supported translation target");
        }
    }

    Ok(())
}

fn show(config: &Config, record: RecordRef, locale: &str) -> Result<()> {
    let store = RecordStore::load(Path::new(&config.store_path))?;

    let json = match record {
        RecordRef::Post(id) => {
            serde_json::to_string_pretty(&PostView::build(store.post(id)?, locale, &config.display))?
        }
        RecordRef::Topic(id) => serde_json::to_string_pretty(&TopicTitleView::build(
            store.topic(id)?,
            locale,
            &config.display,
        ))?,
    };

    println!("{json}");
    Ok(())
}
