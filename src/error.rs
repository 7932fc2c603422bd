use thiserror::Error;

/// Failures a lookup can surface to the HTTP layer. Malformed user input maps
/// to 400, missing data to 404, unreadable or corrupt data files to 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid reference format, use Book Chapter:Verse like 'John 3:16'")]
    InvalidFormat,

    #[error("unknown book name: {0}")]
    UnknownBook(String),

    #[error("end verse {end} cannot be lower than start verse {start}")]
    InvalidRange { start: u32, end: u32 },

    #[error("chapter {chapter} of {book} not found")]
    ChapterNotFound { book: String, chapter: u32 },

    #[error("no verses found for {0}")]
    VerseNotFound(String),

    #[error("{0} not found")]
    DataFileMissing(String),

    #[error("failed to read {file}: {source}")]
    DataFileUnreadable {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    DataFileMalformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
