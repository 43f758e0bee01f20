//! Record-level analyses that bypass the route graph.
//!
//! - `distribution`: frequency / price / demand band counts.
//! - `seasonal`: per-season averages.
//! - `coverage`: per-airline footprint and route listing.
//! - `airport`: one airport's departures and blended hub score.

pub mod airport;
pub mod coverage;
pub mod distribution;
pub mod seasonal;

pub use airport::{AirportConnections, Departure, airport_connections};
pub use coverage::{AirlineCoverage, airline_coverage, routes_for_airline};
pub use distribution::{
    DemandBuckets, DistributionBands, DistributionBuckets, FrequencyBuckets, PriceBuckets,
    distribution_of, distribution_with,
};
pub use seasonal::{SeasonStats, SeasonalSummary, seasonal_summary_of};
