//! Page similarity metrics.
//!
//! [`aligned_ratio`] is the default: it compares characters position by
//! position, so it is cheap and strictly order-sensitive. Two pages with the
//! same paragraphs in a different order score low. [`shingle_ratio`] is an
//! opt-in alternative that catches reordered content.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of words per shingle for [`shingle_ratio`]
pub const SHINGLE_SIZE: usize = 3;

/// Metric used to compare two page texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Position-aligned character matches over the longer length
    #[default]
    Aligned,
    /// Jaccard similarity over word shingles
    Shingle,
}

impl SimilarityMetric {
    pub fn ratio(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::Aligned => aligned_ratio(a, b),
            SimilarityMetric::Shingle => shingle_ratio(a, b),
        }
    }
}

/// Fraction of positions holding the same character in both texts.
///
/// Positions past the end of the shorter text never match, and the count is
/// divided by the length of the longer text. Returns 0.0 when both are empty.
pub fn aligned_ratio(a: &str, b: &str) -> f64 {
    let mut common = 0usize;
    let mut len_a = 0usize;
    let mut len_b = 0usize;

    let mut chars_a = a.chars();
    let mut chars_b = b.chars();
    loop {
        match (chars_a.next(), chars_b.next()) {
            (Some(x), Some(y)) => {
                len_a += 1;
                len_b += 1;
                if x == y {
                    common += 1;
                }
            }
            (Some(_), None) => len_a += 1,
            (None, Some(_)) => len_b += 1,
            (None, None) => break,
        }
    }

    let longest = len_a.max(len_b);
    if longest == 0 {
        return 0.0;
    }
    common as f64 / longest as f64
}

/// Jaccard similarity of the word shingle sets of both texts.
///
/// Texts with fewer than [`SHINGLE_SIZE`] words are compared as whole-text
/// shingles of their own length. Returns 0.0 when both sets are empty.
pub fn shingle_ratio(a: &str, b: &str) -> f64 {
    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let shingles_a = shingles(&words_a);
    let shingles_b = shingles(&words_b);

    let union = shingles_a.union(&shingles_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = shingles_a.intersection(&shingles_b).count();
    intersection as f64 / union as f64
}

fn shingles<'a>(words: &'a [&'a str]) -> HashSet<&'a [&'a str]> {
    if words.is_empty() {
        return HashSet::new();
    }
    let size = SHINGLE_SIZE.min(words.len());
    words.windows(size).collect()
}
