use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tolk", version, about = "Translate forum posts and topic titles with Google Translate")]
pub struct Cli {
    /// JSON record store (defaults to TOLK_STORE_PATH or tolk-store.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect and cache the source language of a record
    Detect {
        #[command(flatten)]
        record: RecordArg,
    },
    /// Check whether SOURCE can be translated into the host locale TARGET
    Supported { source: String, target: String },
    /// Translate a record and cache the result
    Translate {
        #[command(flatten)]
        record: RecordArg,
        /// Host locale to translate into (defaults to TRANSLATOR_DEFAULT_LOCALE)
        #[arg(long)]
        target: Option<String>,
    },
    /// Render a record the way a reader with LOCALE would see it
    Show {
        #[command(flatten)]
        record: RecordArg,
        #[arg(long)]
        locale: Option<String>,
    },
    /// List host locales and their provider codes
    Locales,
}

#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct RecordArg {
    #[arg(long)]
    pub post: Option<u64>,
    #[arg(long)]
    pub topic: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Post(u64),
    Topic(u64),
}

impl From<RecordArg> for RecordRef {
    fn from(arg: RecordArg) -> Self {
        match (arg.post, arg.topic) {
            (Some(id), _) => RecordRef::Post(id),
            (None, Some(id)) => RecordRef::Topic(id),
            // clap's arg group rejects this
            (None, None) => unreachable!("either --post or --topic is required"),
        }
    }
}
