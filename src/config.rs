use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("ABIDE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Self {
            bind_addr: env::var("ABIDE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            data_dir,
        }
    }

    pub fn bible_dir(&self) -> PathBuf {
        self.data_dir.join("bible")
    }

    pub fn topics_path(&self) -> PathBuf {
        self.data_dir.join("topics.json")
    }

    pub fn emotion_path(&self) -> PathBuf {
        self.data_dir.join("emotion.json")
    }

    pub fn related_path(&self) -> PathBuf {
        self.data_dir.join("related.json")
    }

    pub fn synonyms_path(&self) -> PathBuf {
        self.data_dir.join("Synonyms.txt")
    }

    pub fn devotional_path(&self) -> PathBuf {
        self.data_dir.join("rhapsody.json")
    }
}
