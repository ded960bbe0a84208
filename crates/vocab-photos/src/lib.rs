mod istock;

pub use istock::{IStockPhotos, extract_image_sources};

/// Stock photo provider interface
#[async_trait::async_trait]
pub trait PhotoSearch: Send + Sync {
    /// Image links found for a phrase, in page order
    async fn search(&self, query: &str) -> Result<Vec<String>, PhotoError>;

    /// Provider name for diagnostics
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid search url: {0}")]
    InvalidUrl(String),
}
