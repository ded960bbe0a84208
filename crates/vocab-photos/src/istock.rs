use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html};
use vocab_config::network::NetworkConfig;
use vocab_config::photos::PhotoConfig;

use crate::{PhotoError, PhotoSearch};

/// Searches iStockPhoto and collects the image links of a result page
pub struct IStockPhotos {
    client: reqwest::Client,
    search_url: String,
    query_param: String,
}

impl IStockPhotos {
    pub fn new(photos: &PhotoConfig, network: &NetworkConfig) -> Result<Self, PhotoError> {
        let client = reqwest::Client::builder()
            .user_agent(network.user_agent.clone())
            .timeout(Duration::from_secs(network.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            search_url: photos.search_url.clone(),
            query_param: photos.query_param.clone(),
        })
    }

    pub fn search_url(&self, query: &str) -> Result<reqwest::Url, PhotoError> {
        reqwest::Url::parse_with_params(&self.search_url, &[(self.query_param.as_str(), query)])
            .map_err(|e| PhotoError::InvalidUrl(format!("{}: {e}", self.search_url)))
    }
}

#[async_trait]
impl PhotoSearch for IStockPhotos {
    async fn search(&self, query: &str) -> Result<Vec<String>, PhotoError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(query)?;
        tracing::debug!("Searching photos at {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PhotoError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let sources = extract_image_sources(&body);
        tracing::debug!("Found {} photos for '{query}'", sources.len());
        Ok(sources)
    }

    fn name(&self) -> &str {
        "iStockPhoto"
    }
}

/// `src` of every `<img>` in document order, keeping only https links
pub fn extract_image_sources(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "img")
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| src.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
