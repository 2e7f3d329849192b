use crate::config::ScoutConfig;
use crate::domain::ports::PageFetcher;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 以 reqwest 實作的網頁抓取器，預設不設逾時、不重試
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &ScoutConfig) -> Result<Self> {
        Self::with_timeout(config.request_timeout())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("HTTP {} from {}", status, url);

        if !status.is_success() {
            return Err(ScoutError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // 不論 Content-Type 一律當作 HTML 文字
        Ok(response.text().await?)
    }
}
