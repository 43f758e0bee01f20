//! `routenet sample`: emit the synthetic demonstration network.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use clap::builder::RangedU64ValueParser;
use routenet_sim::{HUB_AIRPORTS, SampleConfig, SampleNetwork};
use serde::Serialize;
use tracing::info;

use crate::output::{OutputMode, render};

/// Arguments for `routenet sample`.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// RNG seed; the same seed always yields the same records.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of hub airports to include (2..=10).
    #[arg(
        long,
        default_value_t = HUB_AIRPORTS.len(),
        value_parser = RangedU64ValueParser::<usize>::new().range(2..=10)
    )]
    pub airports: usize,

    /// Write records to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SampleWritten {
    path: String,
    records: usize,
    seed: u64,
}

/// Execute `routenet sample`.
///
/// Records are always written as a JSON array so they can be fed straight
/// back into the other commands.
pub fn run_sample(args: &SampleArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = SampleConfig {
        seed: args.seed,
        airport_limit: args.airports,
        ..SampleConfig::default()
    };
    let records = SampleNetwork::generate(&config)?;

    let Some(path) = &args.output else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "sample written");

    let written = SampleWritten {
        path: path.display().to_string(),
        records: records.len(),
        seed: args.seed,
    };
    render(output, &written, |w, out| {
        writeln!(out, "wrote {} records to {} (seed {})", w.records, w.path, w.seed)
    })
}
