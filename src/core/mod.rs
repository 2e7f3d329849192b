pub mod aggregator;
pub mod extract;
pub mod fetch;
pub mod price;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{ProductRecord, SearchReport, SiteConfig, SiteScrape};
pub use crate::domain::ports::PageFetcher;
pub use crate::utils::error::Result;
