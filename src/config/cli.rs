use crate::adapters::output::OutputFormat;
use crate::config::toml_config::SiteFile;
use crate::config::ScoutConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "price-scout")]
#[command(about = "Search several online shops and list matching products by price")]
pub struct CliConfig {
    /// Case-insensitive substring to match in product names; empty lists everything
    #[arg(default_value = "")]
    pub query: String,

    /// TOML file replacing the built-in site catalog
    #[arg(long)]
    pub sites: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-site request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage after each site")]
    pub monitor: bool,

    /// Show the resolved site catalog without fetching anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 依命令列參數組出網站設定，命令列的 timeout 優先於設定檔
    pub fn load_config(&self) -> Result<ScoutConfig> {
        let mut config = match &self.sites {
            Some(path) => {
                tracing::info!("📁 Loading site catalog from: {}", path.display());
                SiteFile::from_file(path)?.into_config()
            }
            None => ScoutConfig::from_env(),
        };

        if let Some(timeout) = self.timeout {
            config.request_timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}
