use async_trait::async_trait;
use tracing::debug;

use crate::constants::SGC_TEP_URL;
use crate::error::Result;
use crate::types::TepSource;

/// Fetches TEP pages from the Structural Genomics Consortium site.
pub struct SgcSite {
    client: reqwest::Client,
}

impl SgcSite {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TepSource for SgcSite {
    async fn index_page(&self) -> Result<String> {
        debug!("Fetching TEP index from {}", SGC_TEP_URL);
        let body = self.client.get(SGC_TEP_URL).send().await?.text().await?;
        Ok(body)
    }

    async fn detail_page(&self, url: &str) -> Result<String> {
        debug!("Fetching TEP detail page {}", url);
        let body = self.client.get(url).send().await?.text().await?;
        Ok(body)
    }
}
