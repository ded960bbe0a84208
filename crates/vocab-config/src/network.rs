use serde::{Deserialize, Serialize};

fn default_user_agent() -> String {
    "Jason".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// HTTP client settings shared by the dictionary and photo crawlers
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    /// `VOCAB_USER_AGENT` and `HTTP_TIMEOUT_SECONDS`; unparsable timeouts are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(user_agent) = var("VOCAB_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Some(timeout_seconds) = var("HTTP_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = timeout_seconds;
        }
    }
}
