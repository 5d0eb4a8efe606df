use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tolk_translator::{ContentRecord, Post, Topic};

use crate::cli::RecordRef;

/// Posts and topics with their custom fields, persisted as one JSON file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordStore {
    #[serde(default)]
    pub posts: BTreeMap<u64, Post>,
    #[serde(default)]
    pub topics: BTreeMap<u64, Topic>,
}

impl RecordStore {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!("Store {} not found, starting empty", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse store {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write store {}", path.display()))?;
        tracing::debug!("Saved store {}", path.display());
        Ok(())
    }

    pub fn post(&self, id: u64) -> Result<&Post> {
        self.posts.get(&id).with_context(|| format!("No post with id {id}"))
    }

    pub fn topic(&self, id: u64) -> Result<&Topic> {
        self.topics.get(&id).with_context(|| format!("No topic with id {id}"))
    }

    pub fn record_mut(&mut self, record: RecordRef) -> Result<&mut dyn ContentRecord> {
        match record {
            RecordRef::Post(id) => self
                .posts
                .get_mut(&id)
                .map(|post| post as &mut dyn ContentRecord)
                .with_context(|| format!("No post with id {id}")),
            RecordRef::Topic(id) => self
                .topics
                .get_mut(&id)
                .map(|topic| topic as &mut dyn ContentRecord)
                .with_context(|| format!("No topic with id {id}")),
        }
    }
}
