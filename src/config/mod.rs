#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::SiteConfig;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{validate_range, validate_selector, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// (環境變數, 網站名稱, 名稱 selector, 價格 selector)
const BUILTIN_SITES: [(&str, &str, &str, &str); 3] = [
    ("SITE1_URL", "ElectroShop", ".product h2", ".product .price"),
    ("SITE2_URL", "GadgetWorld", ".item h2", ".item .cost"),
    (
        "SITE3_URL",
        "TechBazaar",
        ".product-card h2",
        ".product-card .product-price",
    ),
];

pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// 程式啟動時建立，之後唯讀
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub sites: Vec<SiteConfig>,
    /// None keeps the HTTP client's default of no timeout.
    pub request_timeout_seconds: Option<u64>,
}

impl ScoutConfig {
    /// 內建網站清單，URL 取自 SITE1_URL / SITE2_URL / SITE3_URL
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the built-in catalog, resolving each URL through `lookup`.
    /// An unresolved URL is left empty; that site then yields no products.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let sites = BUILTIN_SITES
            .iter()
            .map(|(env_key, site_name, name_selector, price_selector)| SiteConfig {
                url: lookup(env_key).unwrap_or_default(),
                name_selector: name_selector.to_string(),
                price_selector: price_selector.to_string(),
                site_name: site_name.to_string(),
            })
            .collect();

        Self {
            sites,
            request_timeout_seconds: None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    /// 檢查每個網站的 URL；無效 URL 不是致命錯誤，只會讓該網站沒有結果
    pub fn url_warnings(&self) -> Vec<ScoutError> {
        self.sites
            .iter()
            .filter_map(|site| validate_url(&format!("{}.url", site.site_name), &site.url).err())
            .collect()
    }
}

impl Validate for ScoutConfig {
    fn validate(&self) -> Result<()> {
        if self.sites.is_empty() {
            return Err(ScoutError::ConfigValidationError {
                field: "sites".to_string(),
                message: "at least one site must be configured".to_string(),
            });
        }

        for (index, site) in self.sites.iter().enumerate() {
            if site.site_name.trim().is_empty() {
                return Err(ScoutError::ConfigValidationError {
                    field: format!("sites[{}].site_name", index),
                    message: "site name cannot be empty".to_string(),
                });
            }
            validate_selector(
                &format!("{}.name_selector", site.site_name),
                &site.name_selector,
            )?;
            validate_selector(
                &format!("{}.price_selector", site.site_name),
                &site.price_selector,
            )?;
        }

        if let Some(timeout) = self.request_timeout_seconds {
            validate_range("request_timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let config = ScoutConfig::from_lookup(|key| match key {
            "SITE1_URL" => Some("https://electro.example".to_string()),
            "SITE3_URL" => Some("https://tech.example".to_string()),
            _ => None,
        });

        let names: Vec<_> = config.sites.iter().map(|s| s.site_name.as_str()).collect();
        assert_eq!(names, vec!["ElectroShop", "GadgetWorld", "TechBazaar"]);
        assert_eq!(config.sites[0].url, "https://electro.example");
        assert_eq!(config.sites[1].url, "");
        assert_eq!(config.sites[1].name_selector, ".item h2");
        assert_eq!(config.sites[1].price_selector, ".item .cost");
        assert_eq!(config.sites[2].price_selector, ".product-card .product-price");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_missing_url_is_only_a_warning() {
        let config = ScoutConfig::from_lookup(|_| None);

        assert!(config.validate().is_ok());
        assert_eq!(config.url_warnings().len(), 3);
    }

    #[test]
    fn test_validation_rejects_bad_catalog() {
        let mut config = ScoutConfig::from_lookup(|_| Some("https://x.example".to_string()));
        assert!(config.validate().is_ok());
        assert!(config.url_warnings().is_empty());

        config.sites[0].price_selector = "span[".to_string();
        assert!(config.validate().is_err());

        let mut config = ScoutConfig::from_lookup(|_| None);
        config.request_timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        let empty = ScoutConfig {
            sites: vec![],
            request_timeout_seconds: None,
        };
        assert!(empty.validate().is_err());
    }
}
