use std::fs;
use std::path::PathBuf;

use crate::error::ServiceError;
use crate::models::{ChapterFile, VerseRecord};
use crate::reference::ReferenceParser;

/// Placeholder returned when a reference cannot be resolved to text. Callers
/// treat anything that trims to empty as "no content".
pub const NO_TEXT: &str = " ";

/// Read-only access to the per-book, per-chapter verse files under the bible
/// data directory. Files are loaded fresh per call; nothing is cached.
#[derive(Clone)]
pub struct VerseStore {
    bible_dir: PathBuf,
    parser: ReferenceParser,
}

impl VerseStore {
    pub fn new(bible_dir: PathBuf, parser: ReferenceParser) -> Self {
        Self { bible_dir, parser }
    }

    /// Text of a single verse, or `None` if the chapter exists but the verse
    /// number does not.
    pub fn verse(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<String>, ServiceError> {
        let chapter_data = self.load_chapter(book, chapter)?;
        Ok(chapter_data
            .verses
            .into_iter()
            .find(|record| record.verse == verse)
            .map(|record| record.text))
    }

    /// Verses within the inclusive range, in ascending verse order regardless
    /// of how the file stores them. Empty when nothing falls in range.
    pub fn verses(
        &self,
        book: &str,
        chapter: u32,
        start_verse: u32,
        end_verse: u32,
    ) -> Result<Vec<VerseRecord>, ServiceError> {
        let chapter_data = self.load_chapter(book, chapter)?;
        let mut selected: Vec<VerseRecord> = chapter_data
            .verses
            .into_iter()
            .filter(|record| (start_verse..=end_verse).contains(&record.verse))
            .collect();
        selected.sort_by_key(|record| record.verse);
        Ok(selected)
    }

    /// Resolves a reference string end-to-end to display text, joining ranged
    /// verses with single spaces. Any failure degrades to the [`NO_TEXT`]
    /// placeholder; enrichment callers must never crash on a bad reference.
    pub fn text_for_reference(&self, reference: &str) -> String {
        match self.resolve_text(reference) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!("no text for reference {reference}");
                NO_TEXT.to_string()
            }
            Err(err) => {
                tracing::debug!("could not resolve reference {reference}: {err}");
                NO_TEXT.to_string()
            }
        }
    }

    fn resolve_text(&self, reference: &str) -> Result<Option<String>, ServiceError> {
        let parsed = self.parser.parse(reference)?;
        if parsed.start_verse == parsed.end_verse {
            return self.verse(&parsed.book, parsed.chapter, parsed.start_verse);
        }

        let verses = self.verses(
            &parsed.book,
            parsed.chapter,
            parsed.start_verse,
            parsed.end_verse,
        )?;
        if verses.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            verses
                .iter()
                .map(|record| record.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        ))
    }

    fn load_chapter(&self, book: &str, chapter: u32) -> Result<ChapterFile, ServiceError> {
        let path = self.bible_dir.join(book).join(format!("{chapter}.json"));
        if !path.exists() {
            return Err(ServiceError::ChapterNotFound {
                book: book.to_string(),
                chapter,
            });
        }

        let raw = fs::read_to_string(&path).map_err(|source| ServiceError::DataFileUnreadable {
            file: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ServiceError::DataFileMalformed {
            file: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::BIBLE_BOOKS;
    use tempfile::TempDir;

    fn store_with_chapter(book: &str, chapter: u32, body: &str) -> (TempDir, VerseStore) {
        let dir = TempDir::new().unwrap();
        let book_dir = dir.path().join(book);
        std::fs::create_dir_all(&book_dir).unwrap();
        std::fs::write(book_dir.join(format!("{chapter}.json")), body).unwrap();
        let store = VerseStore::new(
            dir.path().to_path_buf(),
            ReferenceParser::new(&BIBLE_BOOKS),
        );
        (dir, store)
    }

    #[test]
    fn single_verse_lookup() {
        let (_dir, store) = store_with_chapter(
            "John",
            3,
            r#"{"verses": [{"verse": 16, "text": "For God so loved the world"}]}"#,
        );

        let text = store.verse("John", 3, 16).unwrap();
        assert_eq!(text.as_deref(), Some("For God so loved the world"));

        let missing = store.verse("John", 3, 99).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn missing_chapter_file_is_chapter_not_found() {
        let (_dir, store) = store_with_chapter("John", 3, r#"{"verses": []}"#);
        let err = store.verse("John", 4, 1).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ChapterNotFound { chapter: 4, .. }
        ));
    }

    #[test]
    fn ranged_lookup_sorts_regardless_of_storage_order() {
        let (_dir, store) = store_with_chapter(
            "Psalms",
            23,
            r#"{"verses": [
                {"verse": 4, "text": "four"},
                {"verse": 1, "text": "one"},
                {"verse": 3, "text": "three"},
                {"verse": 2, "text": "two"},
                {"verse": 5, "text": "five"}
            ]}"#,
        );

        let verses = store.verses("Psalms", 23, 2, 4).unwrap();
        let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
    }

    #[test]
    fn empty_range_is_distinct_from_missing_chapter() {
        let (_dir, store) =
            store_with_chapter("Psalms", 23, r#"{"verses": [{"verse": 1, "text": "one"}]}"#);
        let verses = store.verses("Psalms", 23, 10, 12).unwrap();
        assert!(verses.is_empty());
    }

    #[test]
    fn reference_text_joins_range_with_spaces() {
        let (_dir, store) = store_with_chapter(
            "Psalms",
            23,
            r#"{"verses": [
                {"verse": 2, "text": "second"},
                {"verse": 1, "text": "first"}
            ]}"#,
        );

        assert_eq!(store.text_for_reference("Psalms 23:1-2"), "first second");
        assert_eq!(store.text_for_reference("Psalms 23:1"), "first");
    }

    #[test]
    fn unresolvable_reference_degrades_to_placeholder() {
        let (_dir, store) = store_with_chapter("John", 3, r#"{"verses": []}"#);

        assert_eq!(store.text_for_reference("John 4:1"), NO_TEXT);
        assert_eq!(store.text_for_reference("not a reference"), NO_TEXT);
        assert_eq!(store.text_for_reference("John 3:16"), NO_TEXT);
    }

    #[test]
    fn malformed_chapter_file_is_a_data_error() {
        let (_dir, store) = store_with_chapter("John", 3, "not json");
        let err = store.verse("John", 3, 16).unwrap_err();
        assert!(matches!(err, ServiceError::DataFileMalformed { .. }));
    }
}
