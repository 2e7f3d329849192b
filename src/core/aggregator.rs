use crate::config::ScoutConfig;
use crate::core::fetch::{log_site_failure, scrape_site};
use crate::core::{PageFetcher, ProductRecord, SearchReport};
use crate::domain::model::{SiteStatus, SiteSummary};
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

/// 依序抓取所有網站，合併、篩選並依價格排序
pub struct Aggregator<'a, F: PageFetcher> {
    config: &'a ScoutConfig,
    fetcher: F,
    monitor: SystemMonitor,
}

impl<'a, F: PageFetcher> Aggregator<'a, F> {
    pub fn new(config: &'a ScoutConfig, fetcher: F) -> Self {
        Self::new_with_monitoring(config, fetcher, false)
    }

    pub fn new_with_monitoring(config: &'a ScoutConfig, fetcher: F, monitor_enabled: bool) -> Self {
        Self {
            config,
            fetcher,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn search(&self, query: &str) -> Vec<ProductRecord> {
        self.search_with_report(query).await.products
    }

    /// Never fails: a site that cannot be scraped shows up as
    /// [`SiteStatus::Failed`] and contributes no products.
    pub async fn search_with_report(&self, query: &str) -> SearchReport {
        tracing::info!(
            "🔍 Searching {} sites for '{}'",
            self.config.sites.len(),
            query
        );

        let mut products = Vec::new();
        let mut sites = Vec::with_capacity(self.config.sites.len());

        // 依設定順序逐一抓取，不並行
        for site in &self.config.sites {
            let status = match scrape_site(&self.fetcher, site).await {
                Ok(scrape) => {
                    tracing::info!(
                        "✅ {}: {} products ({} skipped)",
                        site.site_name,
                        scrape.records.len(),
                        scrape.skipped.len()
                    );
                    let status = SiteStatus::Ok {
                        records: scrape.records.len(),
                        skipped: scrape.skipped.len(),
                    };
                    products.extend(scrape.records);
                    status
                }
                Err(e) => {
                    log_site_failure(site, &e);
                    SiteStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            self.monitor.log_stats(&site.site_name);
            sites.push(SiteSummary {
                site_name: site.site_name.clone(),
                url: site.url.clone(),
                status,
            });
        }

        let products = filter_and_sort(products, query);
        tracing::info!("📦 {} products after filtering", products.len());
        self.monitor.log_final_stats();

        SearchReport {
            query: query.to_string(),
            searched_at: Utc::now(),
            products,
            sites,
        }
    }
}

/// 不分大小寫的子字串篩選，空字串代表不篩選
pub fn filter_by_query(products: Vec<ProductRecord>, query: &str) -> Vec<ProductRecord> {
    if query.is_empty() {
        return products;
    }

    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable ascending sort: equal prices keep their site order.
pub fn sort_by_price(products: &mut [ProductRecord]) {
    products.sort_by_key(|p| p.price);
}

pub fn filter_and_sort(products: Vec<ProductRecord>, query: &str) -> Vec<ProductRecord> {
    let mut products = filter_by_query(products, query);
    sort_by_price(&mut products);
    products
}
