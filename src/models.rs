use serde::{Deserialize, Serialize};

/// One verse of a chapter file, `{"verse": 16, "text": "For God so loved..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerseRecord {
    pub verse: u32,
    pub text: String,
}

/// On-disk shape of `<bible>/<Book>/<chapter>.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterFile {
    #[serde(default)]
    pub verses: Vec<VerseRecord>,
}

/// A reference string paired with its resolved text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferencedText {
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudyRequest {
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyResponse {
    pub reference: String,
    pub verses: Vec<VerseRecord>,
    pub related_verses: Vec<ReferencedText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResult {
    pub topic: String,
    pub verses: Vec<ReferencedText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: String,
    pub verses: Vec<ReferencedText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub query: String,
    pub topic_result: Option<TopicResult>,
    pub emotion_result: Option<EmotionResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicListResponse {
    pub topics: Vec<String>,
}

/// Reading-plan block inside a devotional entry. The numeric JSON keys come
/// from the offline PDF extraction that produces the devotional file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingPlan {
    #[serde(rename = "1_year_plan", default)]
    pub one_year_plan: String,
    #[serde(rename = "2_year_plan", default)]
    pub two_year_plan: String,
}

/// One calendar day's devotional, keyed by a "Month Day" label like "August 04".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devotional {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub memory_verse: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub prayer: String,
    #[serde(default)]
    pub further_study: String,
    #[serde(default)]
    pub bible_reading_plan: ReadingPlan,
}
