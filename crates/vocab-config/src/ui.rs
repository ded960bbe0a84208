use serde::{Deserialize, Serialize};

fn default_photos_per_page() -> usize {
    2
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_photos_per_page")]
    pub photos_per_page: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            photos_per_page: default_photos_per_page(),
        }
    }
}
