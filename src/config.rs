use crate::error::{Error, Result};
use crate::filter::FileFilterConfig;
use crate::similarity::SimilarityMetric;
use crate::sitemap::{ChangeFreq, KeywordRule, PageRank};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Configuration for the near-duplicate detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateConfig {
    /// Pairs must score strictly above this ratio to be reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Pages whose extracted prefix is at most this many characters long are
    /// ignored, so a prefix of exactly `min_length` characters is discarded too
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Number of characters of normalized text that are compared
    #[serde(default = "default_prefix_length")]
    pub prefix_length: usize,

    /// Similarity metric
    #[serde(default)]
    pub metric: SimilarityMetric,

    /// File name of the report written inside the scanned directory
    #[serde(default = "default_report_name")]
    pub report_name: String,

    /// Which files count as pages
    #[serde(default)]
    pub filter: FileFilterConfig,
}

impl DuplicateConfig {
    /// Check that the threshold is a finite ratio in 0.0..=1.0
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!(
                "threshold {} is outside the range 0.0 to 1.0",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for the sitemap builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Public URL of the site root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File name of the sitemap written inside the scanned directory
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Exact file name lookups, checked first
    #[serde(default = "default_priorities")]
    pub priorities: BTreeMap<String, PageRank>,

    /// Keyword rules, checked in order when no exact entry exists
    #[serde(default = "default_keyword_rules")]
    pub keyword_rules: Vec<KeywordRule>,

    /// Rank for pages that match nothing else
    #[serde(default = "default_rank")]
    pub default_rank: PageRank,

    /// Which files are listed
    #[serde(default = "default_sitemap_filter")]
    pub filter: FileFilterConfig,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duplicates: DuplicateConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.duplicates.validate()?;
        Ok(config)
    }
}

fn default_threshold() -> f64 {
    0.8
}

fn default_min_length() -> usize {
    100
}

fn default_prefix_length() -> usize {
    1000
}

fn default_report_name() -> String {
    "duplicate_report.json".to_string()
}

fn default_base_url() -> String {
    "https://zezooo342.github.io".to_string()
}

fn default_output_file() -> String {
    "sitemap.xml".to_string()
}

fn default_rank() -> PageRank {
    PageRank::new(0.6, ChangeFreq::Monthly)
}

fn default_sitemap_filter() -> FileFilterConfig {
    // The root URL stands in for index.html
    FileFilterConfig::excluding(&[r"^404\.html$", r"^index\.html$"])
}

fn default_priorities() -> BTreeMap<String, PageRank> {
    use ChangeFreq::*;

    let table = [
        ("index.html", 1.0, Daily),
        ("about.html", 0.9, Monthly),
        ("contact.html", 0.9, Monthly),
        ("articles.html", 0.9, Weekly),
        ("privacy.html", 0.8, Monthly),
        ("invest-arab.html", 0.8, Weekly),
        ("make-money-online.html", 0.8, Weekly),
        ("crypto-guide.html", 0.8, Weekly),
        ("management.html", 0.8, Weekly),
        ("crypto-security.html", 0.7, Weekly),
        ("ai.html", 0.7, Weekly),
        ("article.html", 0.7, Weekly),
        ("business-plan-simple.html", 0.7, Weekly),
        ("faq.html", 0.6, Monthly),
        ("team.html", 0.6, Monthly),
        ("reviews.html", 0.6, Monthly),
        ("media.html", 0.6, Monthly),
        ("amp-article.html", 0.5, Weekly),
        ("طرق_ربح_المال_auto.html", 0.7, Weekly),
    ];

    table
        .into_iter()
        .map(|(name, priority, freq)| (name.to_string(), PageRank::new(priority, freq)))
        .collect()
}

fn default_keyword_rules() -> Vec<KeywordRule> {
    use ChangeFreq::*;

    [
        ("crypto", 0.8, Weekly),
        ("invest", 0.8, Weekly),
        ("money", 0.7, Weekly),
        ("ربح", 0.7, Weekly),
        ("guide", 0.7, Weekly),
        ("article", 0.7, Weekly),
    ]
    .into_iter()
    .map(|(keyword, priority, freq)| KeywordRule::new(keyword, PageRank::new(priority, freq)))
    .collect()
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_length: default_min_length(),
            prefix_length: default_prefix_length(),
            metric: SimilarityMetric::default(),
            report_name: default_report_name(),
            filter: FileFilterConfig::default(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_file: default_output_file(),
            priorities: default_priorities(),
            keyword_rules: default_keyword_rules(),
            default_rank: default_rank(),
            filter: default_sitemap_filter(),
        }
    }
}
