use crate::devotional_store::DevotionalStore;
use crate::emotion_store::EmotionStore;
use crate::error::ServiceError;
use crate::models::{
    AskResponse, Devotional, EmotionResult, ReferencedText, StudyResponse, TopicResult,
    VerseRecord,
};
use crate::reference::ReferenceParser;
use crate::related_store::RelatedStore;
use crate::synonym_store::SynonymStore;
use crate::topic_store::TopicStore;
use crate::verse_store::VerseStore;

const TEXT_NOT_FOUND: &str = "Text not found";

/// Composes the parser and stores behind the HTTP handlers. Parsing and
/// main-verse failures surface to the caller; enrichment lookups (related
/// verses, synonyms, per-reference text) degrade instead of failing the
/// request.
#[derive(Clone)]
pub struct BibleService {
    parser: ReferenceParser,
    verses: VerseStore,
    topics: TopicStore,
    emotions: EmotionStore,
    related: RelatedStore,
    synonyms: SynonymStore,
    devotionals: DevotionalStore,
}

impl BibleService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        parser: ReferenceParser,
        verses: VerseStore,
        topics: TopicStore,
        emotions: EmotionStore,
        related: RelatedStore,
        synonyms: SynonymStore,
        devotionals: DevotionalStore,
    ) -> Self {
        Self {
            parser,
            verses,
            topics,
            emotions,
            related,
            synonyms,
            devotionals,
        }
    }

    /// Main verse(s) for a reference plus related verses with their text.
    pub fn study(&self, reference: &str) -> Result<StudyResponse, ServiceError> {
        let parsed = self.parser.parse(reference)?;

        let verses = if parsed.start_verse == parsed.end_verse {
            let text = self
                .verses
                .verse(&parsed.book, parsed.chapter, parsed.start_verse)?
                .ok_or_else(|| ServiceError::VerseNotFound(reference.to_string()))?;
            vec![VerseRecord {
                verse: parsed.start_verse,
                text,
            }]
        } else {
            let selected = self.verses.verses(
                &parsed.book,
                parsed.chapter,
                parsed.start_verse,
                parsed.end_verse,
            )?;
            if selected.is_empty() {
                return Err(ServiceError::VerseNotFound(reference.to_string()));
            }
            selected
        };

        let related_refs = match self.related.find(reference) {
            Ok(refs) => refs,
            Err(err) => {
                tracing::warn!("related verse lookup unavailable: {err}");
                Vec::new()
            }
        };

        // Enrichment only: references that resolve to nothing are dropped.
        let mut related_verses = Vec::new();
        for related_ref in related_refs {
            let text = self.verses.text_for_reference(&related_ref);
            if !text.trim().is_empty() {
                related_verses.push(ReferencedText {
                    reference: related_ref,
                    text,
                });
            }
        }

        Ok(StudyResponse {
            reference: reference.to_string(),
            verses,
            related_verses,
        })
    }

    /// Free-text question answered from the topic and emotion indices. Never
    /// fails; a query matching neither index returns both results empty.
    pub fn ask(&self, query: &str) -> AskResponse {
        let query = query.trim().to_lowercase();
        let keywords = self.synonyms.expand(&query);

        let mut topic_result = None;
        for keyword in &keywords {
            match self.topics.find(keyword) {
                Ok(Some(entry)) => {
                    topic_result = Some(TopicResult {
                        topic: entry.topic,
                        verses: self.resolve_references(entry.references),
                    });
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("topic lookup unavailable: {err}");
                    break;
                }
            }
        }

        let mut emotion_result = None;
        for keyword in &keywords {
            match self.emotions.find(keyword) {
                Ok(Some(entry)) => {
                    emotion_result = Some(EmotionResult {
                        emotion: entry.feeling,
                        verses: self.resolve_references(entry.references),
                    });
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("emotion lookup unavailable: {err}");
                    break;
                }
            }
        }

        AskResponse {
            query,
            topic_result,
            emotion_result,
        }
    }

    pub fn topic_names(&self) -> Result<Vec<String>, ServiceError> {
        self.topics.topic_names()
    }

    pub fn devotional_today(&self) -> Option<Devotional> {
        self.devotionals.today()
    }

    /// Attaches display text to bare references. Unresolved references keep
    /// their place with a marker instead of being dropped.
    fn resolve_references(&self, references: Vec<String>) -> Vec<ReferencedText> {
        references
            .into_iter()
            .map(|reference| {
                let text = self.verses.text_for_reference(&reference);
                let text = if text.trim().is_empty() {
                    TEXT_NOT_FOUND.to_string()
                } else {
                    text
                };
                ReferencedText { reference, text }
            })
            .collect()
    }
}
