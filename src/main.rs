use clap::Parser;
use sitepages::sitemap;
use sitepages::{Config, DuplicateDetector, DuplicateReport, SitemapBuilder};
use std::process::ExitCode;

mod args;
use args::{Args, Command, convert_metric};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> sitepages::Result<()> {
    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    match args.command {
        Command::Duplicates {
            dir,
            threshold,
            min_length,
            prefix_length,
            metric,
        } => {
            ::log::info!("Scanning for near-duplicate pages in {}", dir.display());

            let mut detector = DuplicateDetector::new(config.duplicates);
            if let Some(threshold) = threshold {
                detector = detector.with_threshold(threshold);
            }
            if let Some(min_length) = min_length {
                detector = detector.with_min_length(min_length);
            }
            if let Some(prefix_length) = prefix_length {
                detector = detector.with_prefix_length(prefix_length);
            }
            if let Some(metric) = metric {
                detector = detector.with_metric(convert_metric(metric));
            }

            let summary = detector.run(&dir)?;
            println!(
                "Wrote duplicates: {} pairs to {}",
                summary.report.len(),
                summary.report_path.display()
            );
        }

        Command::Sitemap {
            dir,
            base_url,
            output,
            no_validate,
        } => {
            ::log::info!("Building sitemap for {}", dir.display());

            let mut builder = SitemapBuilder::new(config.sitemap);
            if let Some(base_url) = base_url {
                builder = builder.with_base_url(&base_url);
            }
            if let Some(output) = output {
                builder = builder.with_output_file(&output);
            }

            let summary = builder.run(&dir)?;
            println!(
                "Wrote {} URLs to {}",
                summary.url_count,
                summary.output_path.display()
            );

            if !no_validate {
                let count = sitemap::validate(&summary.output_path)?;
                println!("Validated sitemap: {} URLs", count);
            }
        }

        Command::Report { dir } => {
            let path = dir.join(&config.duplicates.report_name);
            let report = DuplicateReport::load(&path)?;
            if report.is_empty() {
                println!("No duplicate pairs in {}", path.display());
            }
            for pair in &report.pairs {
                println!("{:.2}  {}  ~  {}", pair.ratio, pair.a, pair.b);
            }
        }
    }

    Ok(())
}
