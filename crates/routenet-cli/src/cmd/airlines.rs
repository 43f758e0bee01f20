//! `routenet airlines`: carrier coverage, or one carrier's routes.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use routenet_core::{
    AirlineCoverage, RouteRecord, airline_coverage, routes_for_airline, validate_records,
};
use serde::Serialize;
use tracing::debug;

use crate::input::load_records;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `routenet airlines`.
#[derive(Args, Debug)]
pub struct AirlinesArgs {
    /// Route records (JSON array or JSON Lines); `-` reads stdin.
    pub file: PathBuf,

    /// List the routes of this airline (exact, case-sensitive name).
    #[arg(long)]
    pub airline: Option<String>,
}

/// Routes operated by one airline.
#[derive(Debug, Serialize)]
struct AirlineRoutes<'a> {
    airline: &'a str,
    routes: Vec<&'a RouteRecord>,
}

/// Execute `routenet airlines`.
pub fn run_airlines(args: &AirlinesArgs, output: OutputMode) -> anyhow::Result<()> {
    let records = load_records(&args.file)?;
    validate_records(&records).context("route data rejected")?;

    match args.airline.as_deref() {
        Some(name) => {
            let listing = AirlineRoutes {
                airline: name,
                routes: routes_for_airline(&records, name),
            };
            debug!(airline = name, routes = listing.routes.len(), "airline routes");
            render_mode(output, &listing, render_routes_text, |l, w| {
                pretty_section(w, &format!("{}: {} routes", l.airline, l.routes.len()))?;
                render_routes_text(l, w)
            })
        }
        None => {
            let coverage = airline_coverage(&records);
            render_mode(
                output,
                &coverage,
                |c, w| render_coverage_text(c, w),
                |c, w| render_coverage_pretty(c, w),
            )
        }
    }
}

fn render_routes_text(listing: &AirlineRoutes<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    for r in &listing.routes {
        writeln!(
            w,
            "{} -> {}  freq={}  price={:.2}  season={}  demand={:.2}",
            r.origin, r.destination, r.frequency, r.avg_price, r.peak_season, r.demand_score
        )?;
    }
    Ok(())
}

fn render_coverage_text(coverage: &[AirlineCoverage], w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "AIRLINE  ROUTES  AIRPORTS  TOTAL_FREQ  AVG_FREQ")?;
    for c in coverage {
        writeln!(
            w,
            "{}  {}  {}  {}  {:.1}",
            c.airline, c.routes, c.airports, c.total_frequency, c.avg_frequency
        )?;
    }
    Ok(())
}

fn render_coverage_pretty(coverage: &[AirlineCoverage], w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Airline coverage")?;
    if coverage.is_empty() {
        writeln!(w, "  (no airlines)")?;
    }
    for c in coverage {
        writeln!(
            w,
            "  {:<22} {:>4} routes  {:>3} airports  {:>6} flights/wk  avg {:.1}",
            c.airline, c.routes, c.airports, c.total_frequency, c.avg_frequency
        )?;
    }
    Ok(())
}
