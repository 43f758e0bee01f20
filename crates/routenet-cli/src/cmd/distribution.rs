//! `routenet distribution`: frequency, price and demand bands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use routenet_core::{DistributionBuckets, distribution_with};

use crate::input::load_records;
use crate::output::{OutputMode, render};
use crate::settings::load_analysis_config;

/// Arguments for `routenet distribution`.
#[derive(Args, Debug)]
pub struct DistributionArgs {
    /// Route records (JSON array or JSON Lines); `-` reads stdin.
    pub file: PathBuf,
}

/// Execute `routenet distribution`.
pub fn run_distribution(
    args: &DistributionArgs,
    output: OutputMode,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_analysis_config(config_path)?;
    let records = load_records(&args.file)?;
    let buckets =
        distribution_with(&records, &config.bands).context("distribution analysis failed")?;

    render(output, &buckets, render_buckets)
}

fn render_buckets(d: &DistributionBuckets, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "frequency  low={} medium={} high={}", d.frequency.low, d.frequency.medium, d.frequency.high)?;
    writeln!(w, "price      budget={} standard={} premium={}", d.price.budget, d.price.standard, d.price.premium)?;
    writeln!(w, "demand     low={} medium={} high={}", d.demand.low, d.demand.medium, d.demand.high)?;
    Ok(())
}
