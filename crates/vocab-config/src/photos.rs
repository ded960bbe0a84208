use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_search_url() -> String {
    "https://www.istockphoto.com/search/2/image".to_string()
}

fn default_query_param() -> String {
    "phrase".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PhotoConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            search_url: default_search_url(),
            query_param: default_query_param(),
        }
    }
}
