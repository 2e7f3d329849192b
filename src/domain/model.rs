use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 單一商品紀錄，每次搜尋時建立，不做持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: u64,
    pub site: String,
    pub source_url: String,
}

/// 網站抓取規則：URL、兩個 CSS selector 與顯示名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
    pub name_selector: String,
    pub price_selector: String,
    pub site_name: String,
}

/// A name/price pair dropped because its price text held no parsable number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPrice {
    pub name: String,
    pub price_text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteScrape {
    pub records: Vec<ProductRecord>,
    pub skipped: Vec<SkippedPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteStatus {
    Ok { records: usize, skipped: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site_name: String,
    pub url: String,
    #[serde(flatten)]
    pub status: SiteStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub searched_at: DateTime<Utc>,
    pub products: Vec<ProductRecord>,
    pub sites: Vec<SiteSummary>,
}

impl SearchReport {
    pub fn failed_sites(&self) -> impl Iterator<Item = &SiteSummary> {
        self.sites
            .iter()
            .filter(|s| matches!(s.status, SiteStatus::Failed { .. }))
    }
}
