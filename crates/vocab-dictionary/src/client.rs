use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vocab_config::dictionary::DictionaryConfig;
use vocab_config::network::NetworkConfig;
use vocab_core::preprocess::{DefaultPreprocessor, Preprocessor};
use vocab_types::{Lookup, PronunciationAudio};

use crate::DictionarySource;
use crate::cambridge::CambridgeParser;
use crate::error::FetchError;

/// Fetches pages and pronunciations from the Cambridge online dictionary
pub struct CambridgeClient {
    client: reqwest::Client,
    host: String,
    fetch_audio: bool,
    parser: CambridgeParser,
}

impl CambridgeClient {
    pub fn new(dictionary: &DictionaryConfig, network: &NetworkConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(network.user_agent.clone())
            .timeout(Duration::from_secs(network.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            host: dictionary.host.trim_end_matches('/').to_string(),
            fetch_audio: dictionary.fetch_audio,
            parser: CambridgeParser::new(dictionary.translation_marker.clone()),
        })
    }

    /// Page URL for a word, `None` when nothing is left after normalizing
    pub fn entry_url(&self, word: &str) -> Option<String> {
        let term = DefaultPreprocessor.search_term(word);
        if term.is_empty() {
            return None;
        }
        Some(format!("{}/dictionary/english/{}", self.host, term))
    }

    pub fn audio_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.host, path)
    }

    /// GET a resource; non-success statuses are errors
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn pronunciation(&self, path: Option<String>) -> PronunciationAudio {
        let Some(path) = path else {
            return PronunciationAudio::Missing;
        };
        if !self.fetch_audio {
            tracing::debug!("Audio fetching disabled, skipping {path}");
            return PronunciationAudio::Missing;
        }

        let url = self.audio_url(&path);
        match self.fetch(&url).await {
            Ok(bytes) if !bytes.is_empty() => PronunciationAudio::Loaded(bytes),
            Ok(_) => {
                tracing::warn!("Empty pronunciation from {url}");
                PronunciationAudio::Missing
            }
            Err(e) => {
                tracing::warn!("Failed to fetch pronunciation: {e}");
                PronunciationAudio::Unavailable(e.to_string())
            }
        }
    }
}

#[async_trait]
impl DictionarySource for CambridgeClient {
    async fn lookup(&self, word: &str) -> Result<Lookup, FetchError> {
        let Some(url) = self.entry_url(word) else {
            tracing::debug!("Nothing to look up in '{word}'");
            return Ok(Lookup::default());
        };

        tracing::info!("Looking up '{}' at {}", word.trim(), url);
        let document = self.fetch(&url).await?;
        tracing::debug!("Fetched {} bytes", document.len());

        let extraction = self.parser.extract(Some(&document));
        let audio = self.pronunciation(extraction.audio_path).await;

        Ok(Lookup {
            word: word.trim().to_string(),
            result: Arc::new(extraction.result),
            translation: extraction.translation,
            audio,
        })
    }

    fn name(&self) -> &str {
        "Cambridge Dictionary"
    }
}
