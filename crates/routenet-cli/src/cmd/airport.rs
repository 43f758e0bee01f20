//! `routenet airport`: one airport's departures and hub score.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use routenet_core::{AirportConnections, airport_connections, validate_records};

use crate::input::load_records;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use crate::settings::load_analysis_config;

/// Lookup failures for airport queries.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("airport '{0}' does not appear in the route data")]
    UnknownAirport(String),
}

/// Arguments for `routenet airport`.
#[derive(Args, Debug)]
pub struct AirportArgs {
    /// Route records (JSON array or JSON Lines); `-` reads stdin.
    pub file: PathBuf,

    /// Airport code, e.g. `ATL`.
    pub code: String,
}

/// Execute `routenet airport`.
pub fn run_airport(
    args: &AirportArgs,
    output: OutputMode,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_analysis_config(config_path)?;
    let records = load_records(&args.file)?;
    validate_records(&records).context("route data rejected")?;

    let connections = airport_connections(&records, &args.code, &config.hub_score)
        .ok_or_else(|| LookupError::UnknownAirport(args.code.clone()))?;

    render_mode(output, &connections, render_text, render_pretty)
}

fn render_text(c: &AirportConnections, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "airport={} routes={} destinations={} airlines={} avg_frequency={:.1} hub_score={:.3}",
        c.airport,
        c.total_routes,
        c.destinations.len(),
        c.airlines.len(),
        c.avg_frequency,
        c.hub_score
    )?;
    for d in &c.departures {
        writeln!(
            w,
            "{}  {}  {}  {:.2}",
            d.destination, d.airline, d.frequency, d.avg_price
        )?;
    }
    Ok(())
}

fn render_pretty(c: &AirportConnections, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Airport {}", c.airport))?;
    pretty_kv(w, "Departing routes", c.total_routes.to_string())?;
    pretty_kv(w, "Destinations", c.destinations.len().to_string())?;
    pretty_kv(
        w,
        "Airlines",
        c.airlines.iter().cloned().collect::<Vec<_>>().join(", "),
    )?;
    pretty_kv(w, "Avg frequency", format!("{:.1} / week", c.avg_frequency))?;
    pretty_kv(w, "Hub score", format!("{:.3}", c.hub_score))?;

    if !c.departures.is_empty() {
        writeln!(w)?;
        pretty_section(w, "Departures")?;
        for d in &c.departures {
            writeln!(
                w,
                "  -> {:<5} {:<22} {:>3}/wk  {:>8.2}",
                d.destination, d.airline, d.frequency, d.avg_price
            )?;
        }
    }
    Ok(())
}
