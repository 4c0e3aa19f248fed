// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! `sortedness` command-line driver.
//!
//! Sweeps the configured `(size, mixing_factor)` grid for each selected
//! algorithm and prints text heatmaps or a JSON report. The default grid
//! matches the classic 10x10 sweep (sizes up to 9001, mixing factors up to
//! 91) and insertion sort makes it take a while.
//!
//! Log verbosity follows `RUST_LOG` (default `sortedness=info`); logs go to
//! stderr so reports on stdout stay clean.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortedness::algorithm::SortAlgorithm;
use sortedness::generator::ChunkLayout;
use sortedness::heatmap::{render_panels, SweepReport};
use sortedness::measure::{run_all, StepRange, SweepConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One text heatmap per algorithm
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "sortedness",
    version,
    about = "Time sorts over partially shuffled inputs and render heatmaps"
)]
struct Cli {
    /// Smallest sequence length
    #[arg(long, default_value_t = 1)]
    size_start: usize,

    /// Upper bound on sequence length (exclusive)
    #[arg(long, default_value_t = 10_001)]
    size_end: usize,

    /// Distance between sequence lengths
    #[arg(long, default_value_t = 1_000)]
    size_step: usize,

    /// Smallest mixing factor
    #[arg(long, default_value_t = 1)]
    mix_start: usize,

    /// Upper bound on mixing factor (exclusive)
    #[arg(long, default_value_t = 101)]
    mix_end: usize,

    /// Distance between mixing factors
    #[arg(long, default_value_t = 10)]
    mix_step: usize,

    /// Algorithm to time (builtin, timsort, insertion_sort, merge_sort); repeatable
    #[arg(long = "algorithm", short = 'a')]
    algorithms: Vec<SortAlgorithm>,

    /// Generator chunking (sliding or partition)
    #[arg(long, default_value_t = ChunkLayout::SlidingWindow)]
    layout: ChunkLayout,

    /// Seed for the random source; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Skip checking that each sort returned ascending output
    #[arg(long)]
    no_verify: bool,
}

impl Cli {
    fn sweep_config(&self) -> sortedness::Result<SweepConfig> {
        Ok(SweepConfig {
            sizes: StepRange::new(self.size_start, self.size_end, self.size_step)?,
            mixing_factors: StepRange::new(self.mix_start, self.mix_end, self.mix_step)?,
            layout: self.layout,
            verify: !self.no_verify,
        })
    }

    fn algorithms(&self) -> Vec<SortAlgorithm> {
        if self.algorithms.is_empty() {
            SortAlgorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortedness=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.sweep_config()?;
    let algorithms = cli.algorithms();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        cells = config.sizes.len() * config.mixing_factors.len(),
        algorithms = algorithms.len(),
        "starting measurement"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let grids = run_all(&algorithms, &config, &mut rng)?;

    let report = match cli.format {
        OutputFormat::Text => render_panels(&grids),
        OutputFormat::Json => SweepReport::new(Some(seed), config.layout, &grids).to_json()? + "\n",
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(path = %path.display(), "report written");
        }
        None => std::io::stdout().lock().write_all(report.as_bytes())?,
    }
    Ok(())
}
