use regex::Regex;

use crate::error::ServiceError;

/// A normalized scripture address. `end_verse == start_verse` for a
/// single-verse reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub book: String,
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
}

/// Parses strings like "John 3:16" or "1 Samuel 1:1-3" against an injected
/// table of canonical book names.
#[derive(Clone)]
pub struct ReferenceParser {
    books: &'static [&'static str],
    pattern: Regex,
}

impl ReferenceParser {
    pub fn new(books: &'static [&'static str]) -> Self {
        let pattern = Regex::new(r"^([1-3]?\s?[A-Za-z\s]+)\s+(\d+):(\d+)(?:-(\d+))?$")
            .unwrap_or_else(|_| Regex::new("^$").unwrap());
        Self { books, pattern }
    }

    pub fn parse(&self, reference: &str) -> Result<Reference, ServiceError> {
        let reference = reference.trim();
        let captures = self
            .pattern
            .captures(reference)
            .ok_or(ServiceError::InvalidFormat)?;

        let book = title_case(&captures[1]);
        let chapter = parse_number(&captures[2])?;
        let start_verse = parse_number(&captures[3])?;
        let end_verse = match captures.get(4) {
            Some(end) => parse_number(end.as_str())?,
            None => start_verse,
        };

        if end_verse < start_verse {
            return Err(ServiceError::InvalidRange {
                start: start_verse,
                end: end_verse,
            });
        }

        // Store the table's spelling so chapter-file paths are built
        // consistently regardless of input casing.
        let canonical = self
            .books
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(&book))
            .ok_or_else(|| ServiceError::UnknownBook(book.clone()))?;

        Ok(Reference {
            book: (*canonical).to_string(),
            chapter,
            start_verse,
            end_verse,
        })
    }
}

fn parse_number(raw: &str) -> Result<u32, ServiceError> {
    raw.parse().map_err(|_| ServiceError::InvalidFormat)
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
