use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ServiceError;
use crate::topic_store::reference_list;

/// A matched sub-feeling and its bare verse references. Text resolution is
/// the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeelingEntry {
    pub feeling: String,
    pub references: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmotionFile {
    #[serde(rename = "Feelings", default)]
    feelings: Map<String, Value>,
}

/// Lookup over `emotion.json`, nested feeling-group to sub-feeling to
/// reference list. Scans in file order, group by group.
#[derive(Clone)]
pub struct EmotionStore {
    path: PathBuf,
}

impl EmotionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// First sub-feeling whose name contains `keyword`, case-insensitively.
    pub fn find(&self, keyword: &str) -> Result<Option<FeelingEntry>, ServiceError> {
        let data = self.load()?;
        let needle = keyword.to_lowercase();

        for sub_feelings in data.feelings.values() {
            let Some(sub_feelings) = sub_feelings.as_object() else {
                continue;
            };
            for (feeling, verses) in sub_feelings {
                if feeling.to_lowercase().contains(&needle) {
                    return Ok(Some(FeelingEntry {
                        feeling: feeling.clone(),
                        references: reference_list(verses),
                    }));
                }
            }
        }
        Ok(None)
    }

    fn load(&self) -> Result<EmotionFile, ServiceError> {
        if !self.path.exists() {
            return Err(ServiceError::DataFileMissing("emotion.json".to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EMOTIONS: &str = r#"{
        "Feelings": {
            "Heavy": {
                "Sadness": ["Psalms 34:18"],
                "Grief": ["Matthew 5:4", "Revelation 21:4"]
            },
            "Anxious": {
                "Worry": ["Philippians 4:6-7"]
            }
        }
    }"#;

    fn store_with(body: &str) -> (TempDir, EmotionStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emotion.json");
        std::fs::write(&path, body).unwrap();
        (dir, EmotionStore::new(path))
    }

    #[test]
    fn matches_sub_feeling_by_substring() {
        let (_dir, store) = store_with(EMOTIONS);
        let entry = store.find("sad").unwrap().unwrap();
        assert_eq!(entry.feeling, "Sadness");
        assert_eq!(entry.references, vec!["Psalms 34:18"]);
    }

    #[test]
    fn scans_all_groups() {
        let (_dir, store) = store_with(EMOTIONS);
        let entry = store.find("worry").unwrap().unwrap();
        assert_eq!(entry.feeling, "Worry");
    }

    #[test]
    fn group_names_themselves_do_not_match() {
        let (_dir, store) = store_with(EMOTIONS);
        assert!(store.find("heavy").unwrap().is_none());
    }

    #[test]
    fn missing_file_is_data_file_missing() {
        let dir = TempDir::new().unwrap();
        let store = EmotionStore::new(dir.path().join("emotion.json"));
        assert!(matches!(
            store.find("sad").unwrap_err(),
            ServiceError::DataFileMissing(_)
        ));
    }
}
