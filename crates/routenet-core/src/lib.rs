#![forbid(unsafe_code)]
//! routenet-core library.
//!
//! Builds a directed route graph from airline route observations and
//! computes the structural metrics used to identify hub airports and market
//! structure.
//!
//! # Pipeline
//!
//! ```text
//! &[RouteRecord]
//!        ↓  model::validate_records()
//!        ↓  graph::RouteGraph::from_records()
//! RouteGraph (one edge per ordered airport pair)
//!   ├─ metrics::centrality()        degree + betweenness per airport
//!   ├─ metrics::rank_hubs()         top-K by betweenness
//!   └─ graph::connectivity()        path lengths, density, SCCs
//! &[RouteRecord]
//!   ├─ analysis::distribution_of()  frequency / price / demand bands
//!   ├─ analysis::seasonal_summary_of()
//!   └─ analysis::airline_coverage()
//!        ↓  summary::analyze()
//! NetworkSummary
//! ```
//!
//! # Conventions
//!
//! - **Errors**: engine faults are [`AnalysisError`]; loaders use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod model;
pub mod summary;

pub use analysis::{
    AirlineCoverage, AirportConnections, DistributionBands, DistributionBuckets, SeasonStats,
    SeasonalSummary, airline_coverage, airport_connections, distribution_of, distribution_with,
    routes_for_airline, seasonal_summary_of,
};
pub use config::{AnalysisConfig, load_config};
pub use error::{AnalysisError, ErrorCode, RecordDefect};
pub use graph::{ConnectivitySummary, RouteEdge, RouteGraph, connectivity};
pub use metrics::{CentralityResult, HubAirport, HubScoreWeights, NodeCentrality, centrality, rank_hubs};
pub use model::{RouteRecord, Season, validate_records};
pub use summary::{DEFAULT_TOP_HUBS, NetworkAnalyzer, NetworkSummary, analyze};
