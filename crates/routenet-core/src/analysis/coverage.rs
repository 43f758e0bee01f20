//! Per-airline coverage and route listing.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::RouteRecord;

/// Network footprint of one airline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineCoverage {
    pub airline: String,
    /// Records operated by this airline.
    pub routes: usize,
    /// Distinct airports served, as origin or destination.
    pub airports: usize,
    /// Summed in `i128` since this view does not validate its input.
    pub total_frequency: i128,
    /// `total_frequency / routes`.
    pub avg_frequency: f64,
}

/// Coverage of every airline in the records.
///
/// Sorted by route count descending, then airline name ascending.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn airline_coverage(records: &[RouteRecord]) -> Vec<AirlineCoverage> {
    let mut by_airline: BTreeMap<&str, (usize, BTreeSet<&str>, i128)> = BTreeMap::new();

    for r in records {
        let (routes, airports, frequency) = by_airline.entry(r.airline.as_str()).or_default();
        *routes += 1;
        airports.insert(r.origin.as_str());
        airports.insert(r.destination.as_str());
        *frequency += i128::from(r.frequency);
    }

    let mut coverage: Vec<AirlineCoverage> = by_airline
        .into_iter()
        .map(|(airline, (routes, airports, total_frequency))| AirlineCoverage {
            airline: airline.to_string(),
            routes,
            airports: airports.len(),
            total_frequency,
            avg_frequency: total_frequency as f64 / routes as f64,
        })
        .collect();

    coverage.sort_by(|a, b| b.routes.cmp(&a.routes).then_with(|| a.airline.cmp(&b.airline)));
    coverage
}

/// Records operated by `airline` (exact match), in input order.
#[must_use]
pub fn routes_for_airline<'a>(records: &'a [RouteRecord], airline: &str) -> Vec<&'a RouteRecord> {
    records.iter().filter(|r| r.airline == airline).collect()
}
