use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::models::Devotional;

/// Date-keyed lookup into the devotional collection, a JSON array produced
/// offline from the monthly PDF. Entries carry a "Month Day" label like
/// "August 04".
#[derive(Clone)]
pub struct DevotionalStore {
    path: PathBuf,
}

impl DevotionalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Entry for the current local calendar day, if any. Idempotent within a
    /// day since the label only changes at midnight.
    pub fn today(&self) -> Option<Devotional> {
        let label = Local::now().format("%B %d").to_string();
        self.for_label(&label)
    }

    /// First entry whose stored date label matches, ignoring case and
    /// surrounding whitespace. A missing or unreadable file is treated the
    /// same as no entry for the day.
    pub fn for_label(&self, label: &str) -> Option<Devotional> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(
                    "devotional file {} unavailable: {err}",
                    self.path.display()
                );
                return None;
            }
        };

        let entries: Vec<Devotional> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("could not parse {}: {err}", self.path.display());
                return None;
            }
        };

        let label = label.trim();
        entries
            .into_iter()
            .find(|entry| entry.date.trim().eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DEVOTIONALS: &str = r#"[
        {
            "date": "August 04",
            "topic": "Walking In The Light",
            "memory_verse": "(1 John 1:7)",
            "body_text": "Light has come into the world.",
            "prayer": "Dear Father, thank you.",
            "further_study": "John 8:12",
            "bible_reading_plan": {
                "1_year_plan": "Romans 1",
                "2_year_plan": "Psalms 1"
            }
        },
        {
            "date": " august 05 ",
            "topic": "Grace"
        }
    ]"#;

    fn store_with(body: &str) -> (TempDir, DevotionalStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rhapsody.json");
        std::fs::write(&path, body).unwrap();
        (dir, DevotionalStore::new(path))
    }

    #[test]
    fn finds_entry_by_date_label() {
        let (_dir, store) = store_with(DEVOTIONALS);
        let entry = store.for_label("August 04").unwrap();
        assert_eq!(entry.topic, "Walking In The Light");
        assert_eq!(entry.bible_reading_plan.one_year_plan, "Romans 1");
    }

    #[test]
    fn label_match_ignores_case_and_whitespace() {
        let (_dir, store) = store_with(DEVOTIONALS);
        let entry = store.for_label("AUGUST 05").unwrap();
        assert_eq!(entry.topic, "Grace");
    }

    #[test]
    fn no_matching_label_is_none() {
        let (_dir, store) = store_with(DEVOTIONALS);
        assert!(store.for_label("August 31").is_none());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = DevotionalStore::new(dir.path().join("rhapsody.json"));
        assert!(store.for_label("August 04").is_none());
    }

    #[test]
    fn unparsable_file_is_none() {
        let (_dir, store) = store_with("not json");
        assert!(store.for_label("August 04").is_none());
    }
}
