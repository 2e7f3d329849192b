use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得網頁原始 HTML 的介面
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}
