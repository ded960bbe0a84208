use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::photos::PhotoConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod network;
pub mod photos;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub photos: PhotoConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Environment wins over whatever a profile or config file stored
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        self.network.apply_overrides(&var);
        self.dictionary.apply_overrides(&var);
    }
}
