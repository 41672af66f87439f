//! Near-duplicate page detection.
//!
//! Every qualifying page in a directory is reduced to a prefix of its visible
//! text, then each unordered pair is scored and the pairs above the threshold
//! are written to a JSON report next to the pages.

use crate::config::DuplicateConfig;
use crate::error::Result;
use crate::filter::FileFilter;
use crate::parsers::{Parser, text};
use crate::results::{DuplicateReport, Page, ScanSummary, SimilarityPair};
use crate::similarity::SimilarityMetric;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Finds pairs of pages with suspiciously similar visible text
pub struct DuplicateDetector {
    config: DuplicateConfig,
}

impl DuplicateDetector {
    /// Create a new detector with the given configuration
    pub fn new(config: DuplicateConfig) -> Self {
        Self { config }
    }

    /// Set the ratio a pair must strictly exceed
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the minimum prefix length (exclusive) for a page to qualify
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Set how many characters of each page are compared
    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.config.prefix_length = prefix_length;
        self
    }

    /// Set the similarity metric
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.config.metric = metric;
        self
    }

    pub fn config(&self) -> &DuplicateConfig {
        &self.config
    }

    /// Reduce one file to its comparison prefix.
    ///
    /// Returns `None` for content that is not UTF-8 or whose prefix is empty
    /// or not longer than the configured minimum length.
    pub fn extract_page(&self, name: &str, bytes: &[u8]) -> Option<Page> {
        let Ok(content) = std::str::from_utf8(bytes) else {
            ::log::debug!("Skipping {}: not valid UTF-8", name);
            return None;
        };

        let extraction = Parser::parse_file(content, name);
        let prefix = text::truncate_chars(&extraction.content, self.config.prefix_length);
        let len = text::char_len(prefix);

        if prefix.is_empty() || len <= self.config.min_length {
            ::log::debug!("Skipping {}: only {} characters of text", name, len);
            return None;
        }

        ::log::trace!("Extracted {} characters from {} ({:?})", len, name, extraction.region);
        Some(Page::new(name.to_string(), prefix.to_string()))
    }

    /// Read and extract every qualifying page in `dir`, sorted by file name.
    ///
    /// Files that cannot be read are skipped. Failing to list the directory
    /// or an out-of-range threshold is an error.
    pub fn collect_pages(&self, dir: &Path) -> Result<Vec<Page>> {
        self.config.validate()?;
        let filter = FileFilter::new(self.config.filter.clone())?;
        let paths = filter.list_pages(dir)?;

        // Extraction is independent per file; order is restored by the sort below
        let mut pages: Vec<Page> = paths
            .par_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                match fs::read(path) {
                    Ok(bytes) => self.extract_page(name, &bytes),
                    Err(e) => {
                        ::log::debug!("Skipping {}: {}", path.display(), e);
                        None
                    }
                }
            })
            .collect();

        pages.sort_by(|a, b| a.name.cmp(&b.name));
        ::log::info!(
            "{} of {} page files qualify for comparison",
            pages.len(),
            paths.len()
        );
        Ok(pages)
    }

    /// Compare every unordered pair of pages.
    ///
    /// Pairs are discovered with the outer index ascending and the inner index
    /// ascending above it, so the report follows the order of `pages`.
    pub fn find_pairs(&self, pages: &[Page]) -> DuplicateReport {
        let mut report = DuplicateReport::new();

        for (i, first) in pages.iter().enumerate() {
            for second in &pages[i + 1..] {
                let ratio = self.config.metric.ratio(&first.text, &second.text);
                if ratio > self.config.threshold {
                    ::log::debug!(
                        "Near duplicate: {} ~ {} ({:.3})",
                        first.name,
                        second.name,
                        ratio
                    );
                    report.push(SimilarityPair::new(
                        first.name.clone(),
                        second.name.clone(),
                        ratio,
                    ));
                }
            }
        }

        report
    }

    /// Collect the pages of `dir` and compare them, without writing anything
    pub fn scan(&self, dir: &Path) -> Result<DuplicateReport> {
        let pages = self.collect_pages(dir)?;
        Ok(self.find_pairs(&pages))
    }

    /// Scan `dir` and write the report inside it, replacing any previous report
    pub fn run(&self, dir: &Path) -> Result<ScanSummary> {
        let start_time = Instant::now();

        let pages = self.collect_pages(dir)?;
        let report = self.find_pairs(&pages);

        let report_path = dir.join(&self.config.report_name);
        report.write_to(&report_path)?;

        ::log::info!(
            "Compared {} pages in {:.2} seconds, {} pairs above {}",
            pages.len(),
            start_time.elapsed().as_secs_f64(),
            report.len(),
            self.config.threshold
        );

        Ok(ScanSummary {
            pages_compared: pages.len(),
            report,
            report_path,
        })
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(DuplicateConfig::default())
    }
}
