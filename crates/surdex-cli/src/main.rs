//! Surdex command-line front end.

mod bench;
mod logger;
mod menu;

use bench::BenchMode;
use clap::Parser;
use log::info;
use menu::Menu;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use surdex_common::{CatalogConfig, Result};
use surdex_index::Catalog;
use surdex_snapshot::load_or_generate;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Snapshot file to load and save.
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Minimum number of customers after startup.
    #[arg(short, long)]
    min_records: Option<usize>,

    /// Surnames sampled per performance test.
    #[arg(short, long)]
    samples: Option<usize>,

    /// Seed for data generation and sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Time first-match lookups instead of collecting every match.
    #[arg(long)]
    first_match: bool,
}

impl Args {
    /// Builds the effective configuration: defaults, then the file, then flags.
    fn to_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_json_file(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(min_records) = self.min_records {
            config.min_records = min_records;
        }
        if let Some(samples) = self.samples {
            config.benchmark_samples = samples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    fn bench_mode(&self) -> BenchMode {
        if self.first_match {
            BenchMode::FirstMatch
        } else {
            BenchMode::SearchAll
        }
    }
}

fn main() -> Result<()> {
    logger::initialize_logger();

    let args = Args::parse();
    let config = args.to_config()?;
    info!("Starting surdex with {:?}", config);

    let mut catalog = Catalog::new();
    let outcome = load_or_generate(&config, &mut catalog)?;
    info!(
        "Catalog ready: {} loaded, {} generated, persisted: {}",
        outcome.loaded, outcome.generated, outcome.persisted
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(
        &mut catalog,
        stdin.lock(),
        stdout.lock(),
        args.bench_mode(),
        config.benchmark_samples,
        rng,
    )
    .run()
}
