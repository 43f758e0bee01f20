//! `routenet seasonal`: per-season averages.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use routenet_core::{SeasonalSummary, seasonal_summary_of};

use crate::input::load_records;
use crate::output::{OutputMode, render};

/// Arguments for `routenet seasonal`.
#[derive(Args, Debug)]
pub struct SeasonalArgs {
    /// Route records (JSON array or JSON Lines); `-` reads stdin.
    pub file: PathBuf,
}

/// Execute `routenet seasonal`.
pub fn run_seasonal(args: &SeasonalArgs, output: OutputMode) -> anyhow::Result<()> {
    let records = load_records(&args.file)?;
    let summary = seasonal_summary_of(&records).context("seasonal analysis failed")?;

    render(output, &summary, render_seasons)
}

fn render_seasons(summary: &SeasonalSummary, w: &mut dyn Write) -> std::io::Result<()> {
    if summary.is_empty() {
        return writeln!(w, "no route data");
    }
    writeln!(w, "SEASON  ROUTES  AVG_DEMAND  AVG_PRICE  AVG_FREQ  TOTAL_FREQ")?;
    for (season, s) in summary {
        writeln!(
            w,
            "{}  {}  {:.2}  {:.2}  {:.1}  {}",
            season, s.route_count, s.avg_demand, s.avg_price, s.avg_frequency, s.total_frequency
        )?;
    }
    Ok(())
}
