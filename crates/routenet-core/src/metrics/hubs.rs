//! Hub identification.
//!
//! Two distinct notions live here:
//!
//! - [`rank_hubs`]: the structural hub ranking: airports ordered by raw
//!   betweenness, descending, ties broken by airport code ascending.
//! - [`hub_score`]: a caller-tunable blend of an airport's destination count
//!   and average departure frequency:
//!
//!   `H(a) = (w_d * destinations + w_f * avg_frequency) / scale`
//!
//!   It is reported alongside per-airport connection data and never feeds the
//!   structural ranking.

use serde::{Deserialize, Serialize};

use crate::metrics::CentralityResult;

// ---------------------------------------------------------------------------
// Structural ranking
// ---------------------------------------------------------------------------

/// One entry of the hub ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubAirport {
    pub airport: String,
    pub betweenness: f64,
    pub degree: f64,
}

/// Return the top `k` airports by betweenness centrality.
///
/// Ordering is betweenness descending, then airport code ascending, so the
/// ranking is total and stable. `k` larger than the airport count returns
/// every airport; `k == 0` returns nothing.
#[must_use]
pub fn rank_hubs(centrality: &CentralityResult, k: usize) -> Vec<HubAirport> {
    let mut hubs: Vec<HubAirport> = centrality
        .nodes
        .iter()
        .map(|(airport, c)| HubAirport {
            airport: airport.clone(),
            betweenness: c.betweenness,
            degree: c.degree,
        })
        .collect();

    hubs.sort_by(|a, b| {
        b.betweenness
            .total_cmp(&a.betweenness)
            .then_with(|| a.airport.cmp(&b.airport))
    });
    hubs.truncate(k);
    hubs
}

// ---------------------------------------------------------------------------
// Blended hub score
// ---------------------------------------------------------------------------

/// Configurable weights for the blended hub score:
///
/// `H(a) = (destinations * destinations_weight + avg_frequency * frequency_weight) / scale`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubScoreWeights {
    pub destinations_weight: f64,
    pub frequency_weight: f64,
    pub scale: f64,
}

impl Default for HubScoreWeights {
    fn default() -> Self {
        Self {
            destinations_weight: 0.6,
            frequency_weight: 0.4,
            scale: 100.0,
        }
    }
}

/// Compute the blended hub score.
///
/// Non-finite inputs and a non-positive or non-finite `scale` yield 0.0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hub_score(destinations: usize, avg_frequency: f64, weights: &HubScoreWeights) -> f64 {
    if !avg_frequency.is_finite() || !weights.scale.is_finite() || weights.scale <= 0.0 {
        return 0.0;
    }

    let blended = (destinations as f64)
        .mul_add(weights.destinations_weight, avg_frequency * weights.frequency_weight);
    let score = blended / weights.scale;

    if score.is_finite() { score } else { 0.0 }
}
