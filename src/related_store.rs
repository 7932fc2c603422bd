use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ServiceError;

#[derive(Debug, Deserialize)]
struct RelatedFile {
    #[serde(default)]
    verse_groups: Vec<VerseGroup>,
}

#[derive(Debug, Deserialize)]
struct VerseGroup {
    main: String,
    #[serde(default)]
    related: Vec<String>,
}

/// Lookup over `related.json`: groups of references related to one main
/// reference. The match on `main` is exact equality ignoring case, not a
/// substring match.
#[derive(Clone)]
pub struct RelatedStore {
    path: PathBuf,
}

impl RelatedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Related references for `reference`, empty when it has no group.
    pub fn find(&self, reference: &str) -> Result<Vec<String>, ServiceError> {
        let data = self.load()?;
        Ok(data
            .verse_groups
            .into_iter()
            .find(|group| group.main.eq_ignore_ascii_case(reference))
            .map(|group| group.related)
            .unwrap_or_default())
    }

    fn load(&self) -> Result<RelatedFile, ServiceError> {
        if !self.path.exists() {
            return Err(ServiceError::DataFileMissing("related.json".to_string()));
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
