use clap::{Parser, Subcommand, ValueEnum};
use sitepages::SimilarityMetric;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitepages")]
#[command(about = "Near-duplicate detection and sitemap generation for static pages")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find near-duplicate pages and write duplicate_report.json
    Duplicates {
        /// Directory to scan
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Report pairs whose ratio is strictly above this value (0.0 to 1.0)
        #[arg(short, long, value_parser = parse_ratio)]
        threshold: Option<f64>,

        /// Ignore pages with this many characters of text or fewer (a page of
        /// exactly this length is ignored)
        #[arg(long)]
        min_length: Option<usize>,

        /// Number of characters compared per page
        #[arg(long)]
        prefix_length: Option<usize>,

        /// Similarity metric
        #[arg(short, long, value_enum)]
        metric: Option<MetricArg>,
    },

    /// Generate sitemap.xml for the pages of a directory
    Sitemap {
        /// Directory containing the pages
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Public URL of the site root
        #[arg(long)]
        base_url: Option<String>,

        /// Output file name inside DIR
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Skip re-reading the written sitemap
        #[arg(long)]
        no_validate: bool,
    },

    /// Print an existing duplicate report
    Report {
        /// Directory containing the report
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Position-aligned character comparison
    Aligned,
    /// Word shingle overlap
    Shingle,
}

/// Parse a finite ratio between 0.0 and 1.0
fn parse_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return Err(format!("{} is not between 0.0 and 1.0", value));
    }
    Ok(ratio)
}

/// Convert from CLI metric argument to the library metric
pub fn convert_metric(arg: MetricArg) -> SimilarityMetric {
    match arg {
        MetricArg::Aligned => SimilarityMetric::Aligned,
        MetricArg::Shingle => SimilarityMetric::Shingle,
    }
}
