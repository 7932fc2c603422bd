use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Expands a free-text query into keywords using the static synonym file
/// (a JSON object of word to synonym list, despite the .txt extension).
///
/// A missing or unparsable file degrades to "no synonyms": the caller always
/// gets at least the query's own tokens back.
#[derive(Clone)]
pub struct SynonymStore {
    path: PathBuf,
}

impl SynonymStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Lower-cased query tokens in query order, followed by each token's
    /// synonyms in file order; first occurrence wins on duplicates. Keyword
    /// scans over this list are therefore deterministic.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let synonyms = self.load();
        let tokens: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut expanded = Vec::new();
        for token in &tokens {
            if !expanded.contains(token) {
                expanded.push(token.clone());
            }
        }
        for token in &tokens {
            let Some(alternatives) = synonyms.get(token) else {
                continue;
            };
            for alternative in alternatives {
                let alternative = alternative.to_lowercase();
                if !expanded.contains(&alternative) {
                    expanded.push(alternative);
                }
            }
        }
        expanded
    }

    fn load(&self) -> HashMap<String, Vec<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("synonym file {} unavailable: {err}", self.path.display());
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!("could not parse {}: {err}", self.path.display());
                HashMap::new()
            }
        }
    }
}
