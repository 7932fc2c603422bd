use anyhow::Result;
use tracing_subscriber::EnvFilter;

use abide::books::BIBLE_BOOKS;
use abide::devotional_store::DevotionalStore;
use abide::emotion_store::EmotionStore;
use abide::reference::ReferenceParser;
use abide::related_store::RelatedStore;
use abide::service::BibleService;
use abide::synonym_store::SynonymStore;
use abide::topic_store::TopicStore;
use abide::verse_store::VerseStore;
use abide::{run_server, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env();

    let parser = ReferenceParser::new(&BIBLE_BOOKS);
    let verse_store = VerseStore::new(config.bible_dir(), parser.clone());
    let service = BibleService::new(
        parser,
        verse_store,
        TopicStore::new(config.topics_path()),
        EmotionStore::new(config.emotion_path()),
        RelatedStore::new(config.related_path()),
        SynonymStore::new(config.synonyms_path()),
        DevotionalStore::new(config.devotional_path()),
    );

    run_server(config, service).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
