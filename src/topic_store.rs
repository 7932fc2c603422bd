use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::ServiceError;

/// A matched topic and its verse references, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub topic: String,
    pub references: Vec<String>,
}

/// Lookup over `topics.json`, a flat object of topic name to reference list.
/// Matching iterates in the file's insertion order (serde_json is built with
/// `preserve_order`), which makes "first match wins" reproducible.
#[derive(Clone)]
pub struct TopicStore {
    path: PathBuf,
}

impl TopicStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// First topic whose name contains `keyword`, case-insensitively.
    pub fn find(&self, keyword: &str) -> Result<Option<TopicEntry>, ServiceError> {
        let topics = self.load()?;
        let needle = keyword.to_lowercase();

        for (topic, verses) in &topics {
            if topic.to_lowercase().contains(&needle) {
                return Ok(Some(TopicEntry {
                    topic: topic.clone(),
                    references: reference_list(verses),
                }));
            }
        }
        Ok(None)
    }

    /// Topic names only, in file order, for the browsing endpoint. An
    /// unparsable file degrades to an empty listing.
    pub fn topic_names(&self) -> Result<Vec<String>, ServiceError> {
        if !self.path.exists() {
            return Err(ServiceError::DataFileMissing("topics.json".to_string()));
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| {
            ServiceError::DataFileUnreadable {
                file: self.path.display().to_string(),
                source,
            }
        })?;

        match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(topics) => Ok(topics.keys().cloned().collect()),
            Err(err) => {
                tracing::warn!("could not parse {}: {err}", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    fn load(&self) -> Result<Map<String, Value>, ServiceError> {
        if !self.path.exists() {
            return Err(ServiceError::DataFileMissing("topics.json".to_string()));
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| {
            ServiceError::DataFileUnreadable {
                file: self.path.display().to_string(),
                source,
            }
        })?;
        serde_json::from_str(&raw).map_err(|source| ServiceError::DataFileMalformed {
            file: self.path.display().to_string(),
            source,
        })
    }
}

pub(crate) fn reference_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|refs| {
            refs.iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
