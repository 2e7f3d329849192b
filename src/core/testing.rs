use crate::domain::model::SiteConfig;
use crate::domain::ports::PageFetcher;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory fetcher: known URLs return their page, anything else fails with 503.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScoutError::HttpStatusError {
                url: url.to_string(),
                status: 503,
            })
    }
}

pub fn site(name: &str, url: &str, name_selector: &str, price_selector: &str) -> SiteConfig {
    SiteConfig {
        url: url.to_string(),
        name_selector: name_selector.to_string(),
        price_selector: price_selector.to_string(),
        site_name: name.to_string(),
    }
}
