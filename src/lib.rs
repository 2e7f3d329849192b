pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpFetcher;
pub use adapters::output::OutputFormat;
pub use config::ScoutConfig;
pub use core::{
    aggregator::Aggregator,
    extract::extract,
    fetch::{fetch_site, scrape_site},
    price::normalize_price,
};
pub use domain::model::{ProductRecord, SearchReport, SiteConfig};
pub use domain::ports::PageFetcher;
pub use utils::error::{Result, ScoutError};
