//! Reusable demo runner shared by the crate's example binaries.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, error::ErrorKind};

use crate::config::PipelineConfig;
use crate::constants::pipeline::{DEFAULT_AGE_BUCKET, DEFAULT_K_VALUES};
use crate::pipeline::KAnonymityPipeline;
use crate::report::{self, summary_table};
use crate::sink::InMemorySink;
use crate::source::{CensusFileSource, InMemorySource, RecordSource};
use crate::synth::{self, SyntheticConfig};

#[derive(Debug, Parser)]
#[command(
    name = "adult_census_demo",
    disable_help_subcommand = true,
    about = "Run the k-anonymization pipeline over census records",
    long_about = "Generalize, suppress, verify, and measure suppression-only utility loss \
                  for each requested k value, printing a summary table sorted by k."
)]
struct AdultCensusCli {
    #[arg(
        long = "k-values",
        value_name = "K",
        num_args = 1..,
        help = "k thresholds to process, each as an independent run"
    )]
    k_values: Vec<usize>,
    #[arg(
        long = "age-bucket",
        default_value_t = DEFAULT_AGE_BUCKET,
        help = "Age generalization bucket width"
    )]
    age_bucket: i64,
    #[arg(
        long,
        default_value_t = 10_000,
        help = "Synthetic row count used when no input file is given"
    )]
    rows: usize,
    #[arg(long, default_value_t = 42, help = "Seed for the synthetic generator")]
    seed: u64,
    #[arg(
        long,
        value_name = "PATH",
        help = "UCI adult .data file to load instead of synthetic records"
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Write per-k reports as JSON to this path"
    )]
    output: Option<PathBuf>,
}

/// Run the adult-census demo with the given argument iterator.
pub fn run_adult_census_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<AdultCensusCli, _>(
        std::iter::once("adult_census_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let source: Arc<dyn RecordSource> = match &cli.input {
        Some(path) => Arc::new(CensusFileSource::new(path)),
        None => {
            let records = synth::generate(&SyntheticConfig {
                seed: cli.seed,
                rows: cli.rows,
            });
            Arc::new(InMemorySource::new("synthetic", records))
        }
    };

    let config = PipelineConfig {
        k_values: if cli.k_values.is_empty() {
            DEFAULT_K_VALUES.to_vec()
        } else {
            cli.k_values.clone()
        },
        age_bucket: cli.age_bucket,
        ..PipelineConfig::default()
    };

    let sink = Arc::new(InMemorySink::default());
    let pipeline = KAnonymityPipeline::new(config, source, sink)?;
    let reports = pipeline.run_all()?;

    println!("{}", summary_table(&reports));
    if let Some(path) = &cli.output {
        report::write_json(path, &reports)?;
        println!("Wrote per-k reports to {}", path.display());
    }
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
