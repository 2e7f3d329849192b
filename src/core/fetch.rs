use crate::core::extract::extract;
use crate::core::price::normalize_price;
use crate::domain::model::{ProductRecord, SiteConfig, SiteScrape, SkippedPrice};
use crate::domain::ports::PageFetcher;
use crate::utils::error::{Result, ScoutError};

/// 抓取單一網站並轉為商品紀錄，失敗時回傳錯誤原因。
///
/// A pair whose price text cannot be normalized is skipped and reported in
/// [`SiteScrape::skipped`]; the rest of the site is still processed.
pub async fn scrape_site<F>(fetcher: &F, site: &SiteConfig) -> Result<SiteScrape>
where
    F: PageFetcher + ?Sized,
{
    if site.url.is_empty() {
        return Err(ScoutError::MissingConfigError {
            field: format!("url for site {}", site.site_name),
        });
    }

    tracing::debug!("Fetching {} from {}", site.site_name, site.url);
    let markup = fetcher.fetch_page(&site.url).await?;
    tracing::debug!("Received {} bytes from {}", markup.len(), site.url);

    let pairs = extract(&markup, &site.name_selector, &site.price_selector)?;

    let mut scrape = SiteScrape::default();
    for (name, price_text) in pairs {
        match normalize_price(&price_text) {
            Ok(price) => scrape.records.push(ProductRecord {
                name,
                price,
                site: site.site_name.clone(),
                source_url: site.url.clone(),
            }),
            Err(e) => {
                tracing::warn!("⚠️ Skipping '{}' on {}: {}", name, site.site_name, e);
                scrape.skipped.push(SkippedPrice {
                    name,
                    price_text,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(scrape)
}

/// 記錄單一網站失敗，搜尋繼續進行
pub(crate) fn log_site_failure(site: &SiteConfig, err: &ScoutError) {
    tracing::error!("❌ Error scraping {} ({}): {}", site.site_name, site.url, err);
    tracing::debug!("💡 Suggestion: {}", err.recovery_suggestion());
}

/// 與 [`scrape_site`] 相同，但任何錯誤只記錄日誌並回傳空結果。
///
/// Library-level convenience for callers that only want the records;
/// [`Aggregator`](crate::core::aggregator::Aggregator) keeps the failure
/// reason for its report and logs through the same path.
pub async fn fetch_site<F>(fetcher: &F, site: &SiteConfig) -> Vec<ProductRecord>
where
    F: PageFetcher + ?Sized,
{
    match scrape_site(fetcher, site).await {
        Ok(scrape) => scrape.records,
        Err(e) => {
            log_site_failure(site, &e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{site, StaticFetcher};

    #[tokio::test]
    async fn test_scrape_site_tags_records() {
        let fetcher = StaticFetcher::new().page(
            "http://a.test/",
            r#"<div class="product"><h2>Phone X</h2><b class="price">$200</b></div>"#,
        );
        let config = site("ElectroShop", "http://a.test/", ".product h2", ".product .price");

        let scrape = scrape_site(&fetcher, &config).await.unwrap();

        assert_eq!(
            scrape.records,
            vec![ProductRecord {
                name: "Phone X".to_string(),
                price: 200,
                site: "ElectroShop".to_string(),
                source_url: "http://a.test/".to_string(),
            }]
        );
        assert!(scrape.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_price_skips_only_that_record() {
        let fetcher = StaticFetcher::new().page(
            "http://a.test/",
            r#"
            <div class="item"><h2>Cable</h2><i class="cost">Free</i></div>
            <div class="item"><h2>Charger</h2><i class="cost">$25</i></div>
            "#,
        );
        let config = site("GadgetWorld", "http://a.test/", ".item h2", ".item .cost");

        let scrape = scrape_site(&fetcher, &config).await.unwrap();

        assert_eq!(scrape.records.len(), 1);
        assert_eq!(scrape.records[0].name, "Charger");
        assert_eq!(scrape.skipped.len(), 1);
        assert_eq!(scrape.skipped[0].price_text, "Free");
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_empty() {
        let fetcher = StaticFetcher::new();
        let config = site("TechBazaar", "http://down.test/", "h2", ".price");

        assert!(scrape_site(&fetcher, &config).await.is_err());
        assert!(fetch_site(&fetcher, &config).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_url_is_config_error() {
        let fetcher = StaticFetcher::new();
        let config = site("TechBazaar", "", "h2", ".price");

        let err = scrape_site(&fetcher, &config).await.unwrap_err();
        assert!(matches!(err, ScoutError::MissingConfigError { .. }));
        assert!(fetch_site(&fetcher, &config).await.is_empty());
    }

    #[tokio::test]
    async fn test_bad_selector_becomes_empty() {
        let fetcher = StaticFetcher::new().page("http://a.test/", "<h2>x</h2>");
        let config = site("ElectroShop", "http://a.test/", "h2[", ".price");

        let err = scrape_site(&fetcher, &config).await.unwrap_err();
        assert!(matches!(err, ScoutError::SelectorError { .. }));
        assert!(fetch_site(&fetcher, &config).await.is_empty());
    }
}
