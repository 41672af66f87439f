//! Maintenance utilities for a flat directory of static HTML pages: a
//! near-duplicate page detector and a sitemap builder.

pub mod config;
pub mod duplicates;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod similarity;
pub mod sitemap;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use duplicates::DuplicateDetector;
pub use error::{Error, Result};
pub use results::{DuplicateReport, Page, SimilarityPair};
pub use similarity::SimilarityMetric;
pub use sitemap::SitemapBuilder;
