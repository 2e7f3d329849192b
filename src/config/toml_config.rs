use crate::config::ScoutConfig;
use crate::domain::model::SiteConfig;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// TOML 網站清單檔，取代內建的三個網站
///
/// ```toml
/// [http]
/// request_timeout_seconds = 15
///
/// [[sites]]
/// site_name = "ElectroShop"
/// url = "${SITE1_URL}"
/// name_selector = ".product h2"
/// price_selector = ".product .price"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteFile {
    pub http: Option<HttpSection>,
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub request_timeout_seconds: Option<u64>,
}

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

impl SiteFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ScoutError::ConfigError {
            message: format!("cannot read site file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析，先替換 ${VAR} 環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content, |key| std::env::var(key).ok());

        toml::from_str(&processed).map_err(|e| ScoutError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unknown variables are left as-is so the URL check reports them later.
    pub fn substitute_env_vars<L>(content: &str, lookup: L) -> String
    where
        L: Fn(&str) -> Option<String>,
    {
        env_placeholder()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_config(self) -> ScoutConfig {
        ScoutConfig {
            sites: self.sites,
            request_timeout_seconds: self.http.and_then(|h| h.request_timeout_seconds),
        }
    }
}

impl Validate for SiteFile {
    fn validate(&self) -> Result<()> {
        self.clone().into_config().validate()
    }
}
