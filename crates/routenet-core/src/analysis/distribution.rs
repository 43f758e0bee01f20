//! Route distribution by frequency, price and demand.
//!
//! Three independent single-pass histograms over route records (not graph
//! edges). Every band is a closed-open interval:
//!
//! | Metric    | Low            | Middle              | High          |
//! |-----------|----------------|---------------------|---------------|
//! | frequency | `< 14` low     | `[14, 28)` medium   | `≥ 28` high   |
//! | price     | `< 300` budget | `[300, 500)` standard | `≥ 500` premium |
//! | demand    | `< 0.5` low    | `[0.5, 0.8)` medium | `≥ 0.8` high  |
//!
//! The thresholds are configurable through [`DistributionBands`]; the defaults
//! are the table above. Counts for one metric always sum to the record count.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AnalysisError;
use crate::model::{RouteRecord, validate_records};

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Band thresholds. Each `*_below` value is the exclusive upper bound of the
/// lowest band; each `*_from` value is the inclusive lower bound of the
/// highest band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionBands {
    pub frequency_low_below: i64,
    pub frequency_high_from: i64,
    pub price_budget_below: f64,
    pub price_premium_from: f64,
    pub demand_low_below: f64,
    pub demand_high_from: f64,
}

impl Default for DistributionBands {
    fn default() -> Self {
        Self {
            frequency_low_below: 14,
            frequency_high_from: 28,
            price_budget_below: 300.0,
            price_premium_from: 500.0,
            demand_low_below: 0.5,
            demand_high_from: 0.8,
        }
    }
}

impl DistributionBands {
    /// Check that each metric's thresholds are finite and strictly ordered.
    ///
    /// # Errors
    ///
    /// Returns a description of the first misordered pair.
    pub fn validate(&self) -> Result<(), String> {
        if self.frequency_low_below >= self.frequency_high_from {
            return Err(format!(
                "frequency_low_below ({}) must be below frequency_high_from ({})",
                self.frequency_low_below, self.frequency_high_from
            ));
        }
        check_ordered(
            "price_budget_below",
            self.price_budget_below,
            "price_premium_from",
            self.price_premium_from,
        )?;
        check_ordered(
            "demand_low_below",
            self.demand_low_below,
            "demand_high_from",
            self.demand_high_from,
        )
    }
}

fn check_ordered(low_name: &str, low: f64, high_name: &str, high: f64) -> Result<(), String> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(format!(
            "{low_name} ({low}) must be a finite value below {high_name} ({high})"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyBuckets {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBuckets {
    pub budget: usize,
    pub standard: usize,
    pub premium: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandBuckets {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Record counts per band for each metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBuckets {
    pub frequency: FrequencyBuckets,
    pub price: PriceBuckets,
    pub demand: DemandBuckets,
}

impl FrequencyBuckets {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

impl PriceBuckets {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.budget + self.standard + self.premium
    }
}

impl DemandBuckets {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Bucket records using the default bands.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidRecord`] if any record fails validation.
pub fn distribution_of(records: &[RouteRecord]) -> Result<DistributionBuckets, AnalysisError> {
    distribution_with(records, &DistributionBands::default())
}

/// Bucket records using caller-supplied bands.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidBands`] if `bands` fails
/// [`DistributionBands::validate`], or [`AnalysisError::InvalidRecord`] if
/// any record fails validation.
#[instrument(skip(records, bands), fields(records = records.len()))]
pub fn distribution_with(
    records: &[RouteRecord],
    bands: &DistributionBands,
) -> Result<DistributionBuckets, AnalysisError> {
    bands.validate().map_err(AnalysisError::InvalidBands)?;
    validate_records(records)?;
    Ok(bucket_records(records, bands))
}

/// Bucket already-validated records.
pub(crate) fn bucket_records(records: &[RouteRecord], bands: &DistributionBands) -> DistributionBuckets {
    let mut out = DistributionBuckets::default();

    for r in records {
        if r.frequency < bands.frequency_low_below {
            out.frequency.low += 1;
        } else if r.frequency < bands.frequency_high_from {
            out.frequency.medium += 1;
        } else {
            out.frequency.high += 1;
        }

        if r.avg_price < bands.price_budget_below {
            out.price.budget += 1;
        } else if r.avg_price < bands.price_premium_from {
            out.price.standard += 1;
        } else {
            out.price.premium += 1;
        }

        if r.demand_score < bands.demand_low_below {
            out.demand.low += 1;
        } else if r.demand_score < bands.demand_high_from {
            out.demand.medium += 1;
        } else {
            out.demand.high += 1;
        }
    }

    out
}
