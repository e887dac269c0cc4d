use clap::Args;
use internship_match::config::AppConfig;
use internship_match::dataset::{available_sectors, DatasetGenerator, InternshipSnapshot};
use internship_match::error::AppError;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Number of simulated records (defaults to MATCH_DATASET_RECORDS or 2000)
    #[arg(long, value_parser = crate::parse::parse_positive)]
    pub(crate) records: Option<usize>,
    /// Seed for a reproducible dataset
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output CSV path (defaults to MATCH_DATA_FILE)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_generate(args: GenerateArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(records) = args.records {
        config.dataset.records = records;
    }
    if let Some(seed) = args.seed {
        config.dataset.seed = Some(seed);
    }
    if let Some(output) = args.output {
        config.dataset.path = output;
    }

    let mut generator = DatasetGenerator::new(config.dataset.records);
    if let Some(seed) = config.dataset.seed {
        generator = generator.with_seed(seed);
    }

    let records = generator.generate();
    InternshipSnapshot::to_path(&config.dataset.path, &records)?;
    info!(path = %config.dataset.path.display(), "dataset written");

    println!(
        "Wrote {} records to {}",
        records.len(),
        config.dataset.path.display()
    );
    println!("Sectors: {}", available_sectors(&records).join(", "));
    Ok(())
}
