use serde::{Deserialize, Serialize};
use vocab_types::Region;

fn default_host() -> String {
    "https://dictionary.cambridge.org".to_string()
}

fn default_translation_marker() -> String {
    "in Chinese (Traditional)".to_string()
}

fn default_fetch_audio() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Origin of the online dictionary, without trailing slash
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub default_region: Region,
    /// Label text identifying the wanted translation block
    #[serde(default = "default_translation_marker")]
    pub translation_marker: String,
    #[serde(default = "default_fetch_audio")]
    pub fetch_audio: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            default_region: Region::default(),
            translation_marker: default_translation_marker(),
            fetch_audio: default_fetch_audio(),
        }
    }
}

impl DictionaryConfig {
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("DICTIONARY_HOST") {
            self.host = host.trim_end_matches('/').to_string();
        }
    }
}
