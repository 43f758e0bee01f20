//! `routenet analyze`: full network summary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use routenet_core::{NetworkAnalyzer, NetworkSummary};

use crate::input::load_records;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use crate::settings::load_analysis_config;

/// Arguments for `routenet analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Route records (JSON array or JSON Lines); `-` reads stdin.
    pub file: PathBuf,

    /// Number of hub airports to report (overrides `top_hubs` in config).
    #[arg(long)]
    pub top: Option<usize>,
}

/// Execute `routenet analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    output: OutputMode,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = load_analysis_config(config_path)?;
    if let Some(top) = args.top {
        config.top_hubs = top;
    }

    let records = load_records(&args.file)?;
    let summary = NetworkAnalyzer::new(config)
        .analyze(&records)
        .context("network analysis failed")?;

    render_mode(output, &summary, render_text, render_pretty)
}

fn render_text(s: &NetworkSummary, w: &mut dyn Write) -> std::io::Result<()> {
    let c = &s.connectivity;
    writeln!(
        w,
        "records={} airports={} routes={} density={:.3} avg_path={:.2} diameter={} strongly_connected={}",
        s.record_count,
        s.node_count,
        s.edge_count,
        c.density,
        c.avg_shortest_path_length,
        c.diameter,
        c.strongly_connected
    )?;
    writeln!(w, "RANK  AIRPORT  BETWEENNESS  DEGREE")?;
    for (i, hub) in s.hubs.iter().enumerate() {
        writeln!(
            w,
            "{}  {}  {:.3}  {:.3}",
            i + 1,
            hub.airport,
            hub.betweenness,
            hub.degree
        )?;
    }
    Ok(())
}

fn render_pretty(s: &NetworkSummary, w: &mut dyn Write) -> std::io::Result<()> {
    let c = &s.connectivity;

    pretty_section(w, "Route network")?;
    pretty_kv(w, "Records", s.record_count.to_string())?;
    pretty_kv(w, "Airports", s.node_count.to_string())?;
    pretty_kv(w, "Routes", s.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.3}", c.density))?;
    pretty_kv(w, "Avg path length", format!("{:.2}", c.avg_shortest_path_length))?;
    pretty_kv(w, "Diameter", c.diameter.to_string())?;
    pretty_kv(w, "Strongly connected", c.strongly_connected.to_string())?;
    pretty_kv(
        w,
        "Components",
        format!("{} strong / {} weak", c.scc_count, c.weak_component_count),
    )?;

    writeln!(w)?;
    pretty_section(w, "Hub airports")?;
    if s.hubs.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for (i, hub) in s.hubs.iter().enumerate() {
        writeln!(
            w,
            "  {:>2}. {:<6} betweenness {:>10.3}   degree {:.3}",
            i + 1,
            hub.airport,
            hub.betweenness,
            hub.degree
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Distribution")?;
    let d = &s.distribution;
    pretty_kv(
        w,
        "Frequency",
        format!("low {}  medium {}  high {}", d.frequency.low, d.frequency.medium, d.frequency.high),
    )?;
    pretty_kv(
        w,
        "Price",
        format!("budget {}  standard {}  premium {}", d.price.budget, d.price.standard, d.price.premium),
    )?;
    pretty_kv(
        w,
        "Demand",
        format!("low {}  medium {}  high {}", d.demand.low, d.demand.medium, d.demand.high),
    )?;

    writeln!(w)?;
    pretty_section(w, "Seasons")?;
    for (season, stats) in &s.seasonal {
        writeln!(
            w,
            "  {:<7} {:>4} routes   demand {:.2}   price {:>8.2}   freq {:.1}",
            season.as_str(),
            stats.route_count,
            stats.avg_demand,
            stats.avg_price,
            stats.avg_frequency
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Airlines")?;
    for cov in &s.airline_coverage {
        writeln!(
            w,
            "  {:<22} {:>4} routes  {:>3} airports  avg freq {:.1}",
            cov.airline, cov.routes, cov.airports, cov.avg_frequency
        )?;
    }

    Ok(())
}
