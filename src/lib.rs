pub mod books;
pub mod config;
pub mod devotional_store;
pub mod emotion_store;
pub mod error;
pub mod models;
pub mod reference;
pub mod related_store;
pub mod server;
pub mod service;
pub mod synonym_store;
pub mod topic_store;
pub mod verse_store;

pub use config::AppConfig;
pub use server::run_server;
