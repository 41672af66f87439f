use crate::error::{Error, Result};
use crate::utils::round_ratio;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A page that qualified for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// File name of the page inside the scanned directory
    pub name: String,

    /// Normalized, truncated visible text
    pub text: String,
}

impl Page {
    pub fn new(name: String, text: String) -> Self {
        Self { name, text }
    }
}

/// Two distinct pages whose similarity exceeded the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityPair {
    /// First file name (earlier in scan order)
    pub a: String,

    /// Second file name
    pub b: String,

    /// Similarity ratio rounded to two decimals
    pub ratio: f64,
}

impl SimilarityPair {
    /// Create a new pair, rounding the ratio for reporting
    pub fn new(a: String, b: String, ratio: f64) -> Self {
        Self {
            a,
            b,
            ratio: round_ratio(ratio),
        }
    }
}

/// Ordered list of near-duplicate pairs, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DuplicateReport {
    pub pairs: Vec<SimilarityPair>,
}

impl DuplicateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: SimilarityPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation; non-ASCII is written literally
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Load a previously written report
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Outcome of one detector run
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Number of pages that qualified for comparison
    pub pages_compared: usize,

    /// The pairs that were written
    pub report: DuplicateReport,

    /// Where the report was written
    pub report_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ratio_is_rounded() {
        let pair = SimilarityPair::new("a.html".into(), "b.html".into(), 0.87654);
        assert_eq!(pair.ratio, 0.88);
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = DuplicateReport::new();
        report.push(SimilarityPair::new("x.html".into(), "y.html".into(), 1.0));

        let json = report.to_json().unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"a\": \"x.html\",\n    \"b\": \"y.html\",\n    \"ratio\": 1.0\n  }\n]"
        );
    }

    #[test]
    fn test_empty_report_is_empty_array() {
        assert_eq!(DuplicateReport::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_non_ascii_names_are_not_escaped() {
        let mut report = DuplicateReport::new();
        report.push(SimilarityPair::new(
            "طرق_ربح_المال_auto.html".into(),
            "ربح.html".into(),
            0.91,
        ));
        let json = report.to_json().unwrap();
        assert!(json.contains("طرق_ربح_المال_auto.html"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duplicate_report.json");

        let mut report = DuplicateReport::new();
        report.push(SimilarityPair::new("a.html".into(), "b.html".into(), 0.8333));
        report.write_to(&path).unwrap();

        let loaded = DuplicateReport::load(&path).unwrap();
        assert_eq!(loaded, report);
        assert_eq!(loaded.pairs[0].ratio, 0.83);
    }
}
