use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use crate::config::{default_settings_path, InputConfig, Overrides, RunConfig, Settings};
use crate::engine::{Engine, EngineOptions};
use crate::log;
use crate::tools::export::export_dataset;
use crate::tools::fetch::HttpFetcher;

#[derive(Parser, Debug)]
#[command(name = "hotel-reviews", version, about = "Hotel review scraper (JSON / CSV / XLSX)")]
pub struct Cli {
    /// JSON input file (hotelUrl, maxItems, language, outputPath, formats)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Hotel review page URL (overrides hotelUrl from --input)
    #[arg(long = "hotel-url")]
    hotel_url: Option<String>,

    /// Maximum number of reviews to collect
    #[arg(long = "max-items")]
    max_items: Option<usize>,

    /// Language used when a review declares none (e.g. en, nl, fr)
    #[arg(long)]
    language: Option<String>,

    /// Output base path; the extension follows each format
    #[arg(long)]
    output: Option<PathBuf>,

    /// Comma separated output formats: json,csv,xlsx
    #[arg(long)]
    formats: Option<String>,

    /// Settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            hotel_url: self.hotel_url.clone(),
            max_items: self.max_items,
            language: self.language.clone(),
            output: self.output.clone(),
            formats: self.formats.clone(),
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    log::init(cli.verbose);

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("configuration error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match HttpFetcher::new(&cfg.fetch) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new(
        &fetcher,
        EngineOptions {
            max_items: cfg.max_items,
            language: cfg.language.clone(),
        },
    );
    let result = engine.scrape(&cfg.hotel_url);

    match export_dataset(&result.hotel_stats, &result.reviews, &cfg.output_path, &cfg.formats) {
        Ok(paths) => {
            for path in &paths {
                info!(path = %path.display(), "wrote output");
            }
            info!(
                base = %cfg.output_path.display(),
                reviews = result.reviews.len(),
                "all done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to export dataset: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    let input = match &cli.input {
        Some(path) => InputConfig::load(path)
            .with_context(|| format!("loading input config from {}", path.display()))?,
        None => InputConfig::default(),
    };

    Ok(RunConfig::merge(&settings, &input, &cli.overrides())?)
}
