//! Per-season route averages.
//!
//! Records are grouped by `peak_season`. Seasons with no records have no
//! entry at all: a missing season means "no data", which is different from a
//! season whose routes average zero demand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AnalysisError;
use crate::model::{RouteRecord, Season, validate_records};

/// Aggregates for one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub route_count: usize,
    pub avg_demand: f64,
    pub avg_price: f64,
    pub avg_frequency: f64,
    pub total_frequency: i64,
}

/// Season → aggregates, for seasons present in the input only.
pub type SeasonalSummary = BTreeMap<Season, SeasonStats>;

#[derive(Default)]
struct SeasonAccumulator {
    count: usize,
    demand_sum: f64,
    price_sum: f64,
    frequency_sum: i64,
}

/// Group records by peak season and average each group.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidRecord`] if any record fails validation.
#[instrument(skip(records), fields(records = records.len()))]
pub fn seasonal_summary_of(records: &[RouteRecord]) -> Result<SeasonalSummary, AnalysisError> {
    validate_records(records)?;
    Ok(summarize_seasons(records))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn summarize_seasons(records: &[RouteRecord]) -> SeasonalSummary {
    let mut groups: BTreeMap<Season, SeasonAccumulator> = BTreeMap::new();

    for r in records {
        let acc = groups.entry(r.peak_season).or_default();
        acc.count += 1;
        acc.demand_sum += r.demand_score;
        acc.price_sum += r.avg_price;
        acc.frequency_sum += r.frequency;
    }

    groups
        .into_iter()
        .map(|(season, acc)| {
            // Groups are created on first record, so count >= 1.
            let n = acc.count as f64;
            (
                season,
                SeasonStats {
                    route_count: acc.count,
                    avg_demand: acc.demand_sum / n,
                    avg_price: acc.price_sum / n,
                    avg_frequency: acc.frequency_sum as f64 / n,
                    total_frequency: acc.frequency_sum,
                },
            )
        })
        .collect()
}
