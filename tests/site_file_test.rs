use anyhow::Result;
use httpmock::prelude::*;
use price_scout::adapters::output::{render, OutputFormat};
use price_scout::config::toml_config::SiteFile;
use price_scout::utils::validation::Validate;
use price_scout::{Aggregator, HttpFetcher};
use tempfile::TempDir;

/// 從 TOML 網站清單檔執行完整搜尋並輸出 CSV
#[tokio::test]
async fn test_search_from_site_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let shop = server
        .mock_async(|when, then| {
            when.method(GET).path("/shop");
            then.status(200).body(
                r#"
                <ul>
                  <li><span class="title">USB Cable</span><span class="amount">$9.99</span></li>
                  <li><span class="title">USB Hub</span><span class="amount">$24.50</span></li>
                  <li><span class="title">HDMI Cable</span><span class="amount">$5</span></li>
                </ul>
                "#,
            );
        })
        .await;

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("sites.toml");
    let content = format!(
        r#"
[http]
request_timeout_seconds = 10

[[sites]]
site_name = "Corner Store"
url = "{}"
name_selector = "li .title"
price_selector = "li .amount"
"#,
        server.url("/shop")
    );
    tokio::fs::write(&config_path, content).await?;

    let site_file = SiteFile::from_file(&config_path)?;
    site_file.validate()?;
    let config = site_file.into_config();
    assert_eq!(config.request_timeout_seconds, Some(10));

    let aggregator = Aggregator::new(&config, HttpFetcher::from_config(&config)?);
    let report = aggregator.search_with_report("usb").await;

    shop.assert_async().await;

    let csv = render(&report, OutputFormat::Csv)?;
    assert_eq!(
        csv,
        format!(
            "name,price,site,source_url\nUSB Cable,999,Corner Store,{url}\nUSB Hub,2450,Corner Store,{url}\n",
            url = server.url("/shop")
        )
    );

    Ok(())
}

#[test]
fn test_invalid_selector_in_site_file_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &config_path,
        r#"
[[sites]]
site_name = "Broken"
url = "https://broken.example"
name_selector = "h2["
price_selector = ".price"
"#,
    )?;

    let site_file = SiteFile::from_file(&config_path)?;
    assert!(site_file.validate().is_err());

    Ok(())
}

#[test]
fn test_missing_site_file_is_config_error() {
    let err = SiteFile::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, price_scout::ScoutError::ConfigError { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
    assert_eq!(err.severity(), price_scout::utils::error::ErrorSeverity::High);
}
