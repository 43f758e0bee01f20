//! Departure profile of a single airport.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::hubs::{HubScoreWeights, hub_score};
use crate::model::RouteRecord;

/// One departing service from the airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    pub destination: String,
    pub airline: String,
    pub frequency: i64,
    pub avg_price: f64,
}

/// Departures, carriers and blended hub score of one airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportConnections {
    pub airport: String,
    /// Every record departing this airport, in input order.
    pub departures: Vec<Departure>,
    /// Distinct destinations reachable nonstop.
    pub destinations: BTreeSet<String>,
    /// Airlines departing this airport.
    pub airlines: BTreeSet<String>,
    pub total_routes: usize,
    /// Mean weekly frequency over departures (0.0 with none).
    pub avg_frequency: f64,
    /// See [`hub_score`]; computed over departure records.
    pub hub_score: f64,
}

/// Departure profile of `airport`.
///
/// Returns `None` if the code appears nowhere in the records. An airport that
/// only receives flights yields an entry with no departures and a zero score.
/// Records are not validated; frequencies are summed in `i128`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn airport_connections(
    records: &[RouteRecord],
    airport: &str,
    weights: &HubScoreWeights,
) -> Option<AirportConnections> {
    let known = records
        .iter()
        .any(|r| r.origin == airport || r.destination == airport);
    if !known {
        debug!(airport, "airport not present in route data");
        return None;
    }

    let departures: Vec<Departure> = records
        .iter()
        .filter(|r| r.origin == airport)
        .map(|r| Departure {
            destination: r.destination.clone(),
            airline: r.airline.clone(),
            frequency: r.frequency,
            avg_price: r.avg_price,
        })
        .collect();

    let destinations: BTreeSet<String> = departures.iter().map(|d| d.destination.clone()).collect();
    let airlines: BTreeSet<String> = departures.iter().map(|d| d.airline.clone()).collect();
    let total_routes = departures.len();

    let (avg_frequency, score) = if total_routes == 0 {
        (0.0, 0.0)
    } else {
        let total: i128 = departures.iter().map(|d| i128::from(d.frequency)).sum();
        let avg = total as f64 / total_routes as f64;
        // Destination term counts departure records, not distinct destinations.
        (avg, hub_score(total_routes, avg, weights))
    };

    Some(AirportConnections {
        airport: airport.to_string(),
        departures,
        destinations,
        airlines,
        total_routes,
        avg_frequency,
        hub_score: score,
    })
}
