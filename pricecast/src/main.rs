//! Command-line entry point: load a historical series, run the forecast,
//! print the summary report.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pc_math::{InverseCumulative, StandardNormal, StudentT};
use pc_simulation::Forecast;
use tracing_subscriber::EnvFilter;

/// Forecast a price distribution by Monte Carlo simulation over a
/// historical daily close series.
#[derive(Debug, Parser)]
#[command(name = "pricecast", version, about)]
struct Cli {
    /// CSV file with Date,Open,High,Low,Close,Adj Close,Volume columns.
    #[arg(long)]
    data: PathBuf,

    /// Instrument symbol reported in the summary.
    #[arg(long)]
    symbol: String,

    /// Number of future trading days to simulate.
    #[arg(long, default_value = "30")]
    horizon: NonZeroUsize,

    /// Number of independent price paths.
    #[arg(long, default_value = "10000")]
    iterations: NonZeroUsize,

    /// Distribution driving the return-factor transform.
    #[arg(long, value_enum, default_value_t = Distribution::Normal)]
    distribution: Distribution,

    /// Degrees of freedom for the Student-t distribution.
    #[arg(long, default_value = "5.0")]
    df: f64,

    /// Master RNG seed; omit for a fresh seed each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Distribution {
    /// Standard normal.
    Normal,
    /// Student-t with --df degrees of freedom.
    StudentT,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let series = pc_data::load_series(&cli.data, &cli.symbol)
        .with_context(|| format!("loading {}", cli.data.display()))?;

    let distribution: Arc<dyn InverseCumulative> = match cli.distribution {
        Distribution::Normal => Arc::new(StandardNormal),
        Distribution::StudentT => Arc::new(StudentT::new(cli.df)?),
    };

    let mut forecast = Forecast::new(cli.horizon.get(), cli.iterations.get())
        .with_distribution(distribution);
    if let Some(seed) = cli.seed {
        forecast = forecast.with_seed(seed);
    }

    let summary = forecast.run(&series).context("running simulation")?;

    println!("{} price forecast", cli.symbol);
    println!("{summary}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
