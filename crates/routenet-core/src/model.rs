//! Route observations: the engine's only input.
//!
//! A [`RouteRecord`] is one airline's service on one directed airport pair.
//! Many records may share an `(origin, destination)` pair; the collection is
//! unordered and may contain duplicates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, RecordDefect};

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Peak travel season of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Fall,
}

impl Season {
    /// Every season, in declaration order.
    pub const ALL: [Self; 4] = [Self::Summer, Self::Winter, Self::Spring, Self::Fall];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summer" => Ok(Self::Summer),
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "fall" | "autumn" => Ok(Self::Fall),
            other => Err(format!("unknown season '{other}'")),
        }
    }
}

/// Largest weekly frequency a record may carry.
///
/// Bounds every frequency sum the engine computes well inside `i64`.
pub const MAX_WEEKLY_FREQUENCY: i64 = 1_000_000;

// ---------------------------------------------------------------------------
// RouteRecord
// ---------------------------------------------------------------------------

/// One observed airline route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// Operating airline.
    pub airline: String,
    /// Flights per week. Signed so that bad feeds surface as
    /// [`RecordDefect::NegativeFrequency`] rather than a parse failure.
    pub frequency: i64,
    /// Average fare.
    pub avg_price: f64,
    pub peak_season: Season,
    /// Demand in `[0, 1]`.
    pub demand_score: f64,
    /// When the observation was collected. Carried, never analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl RouteRecord {
    /// Convenience constructor without an observation timestamp.
    #[must_use]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        frequency: i64,
        avg_price: f64,
        peak_season: Season,
        demand_score: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            airline: airline.into(),
            frequency,
            avg_price,
            peak_season,
            demand_score,
            scraped_at: None,
        }
    }

    /// Check this record's shape constraints.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordDefect`] found.
    pub fn check(&self) -> Result<(), RecordDefect> {
        if self.origin.trim().is_empty() {
            return Err(RecordDefect::EmptyAirportCode("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(RecordDefect::EmptyAirportCode("destination"));
        }
        if self.origin == self.destination {
            return Err(RecordDefect::SelfLoop(self.origin.clone()));
        }
        if self.airline.trim().is_empty() {
            return Err(RecordDefect::EmptyAirline);
        }
        if self.frequency < 0 {
            return Err(RecordDefect::NegativeFrequency(self.frequency));
        }
        if self.frequency > MAX_WEEKLY_FREQUENCY {
            return Err(RecordDefect::FrequencyTooLarge(self.frequency));
        }
        if !self.avg_price.is_finite() {
            return Err(RecordDefect::NonFinitePrice);
        }
        if self.avg_price < 0.0 {
            return Err(RecordDefect::NegativePrice(self.avg_price));
        }
        if !self.demand_score.is_finite() {
            return Err(RecordDefect::NonFiniteDemand);
        }
        if !(0.0..=1.0).contains(&self.demand_score) {
            return Err(RecordDefect::DemandOutOfRange(self.demand_score));
        }
        Ok(())
    }
}

/// Validate a whole batch of records.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidRecord`] for the first offending record.
/// The batch is rejected as a whole; values are never clamped.
pub fn validate_records(records: &[RouteRecord]) -> Result<(), AnalysisError> {
    for (index, record) in records.iter().enumerate() {
        if let Err(defect) = record.check() {
            debug!(index, %defect, "rejecting route batch");
            return Err(AnalysisError::InvalidRecord { index, defect });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(origin: &str, destination: &str) -> RouteRecord {
        RouteRecord::new(origin, destination, "Delta Air Lines", 10, 300.0, Season::Summer, 0.5)
    }

    #[test]
    fn valid_record_passes() {
        assert!(record("ATL", "LAX").check().is_ok());
    }

    #[test]
    fn boundary_values_are_valid() {
        let mut r = record("ATL", "LAX");
        r.frequency = 0;
        r.avg_price = 0.0;
        r.demand_score = 0.0;
        assert!(r.check().is_ok());
        r.demand_score = 1.0;
        assert!(r.check().is_ok());
    }

    #[test]
    fn negative_frequency_rejected() {
        let mut r = record("ATL", "LAX");
        r.frequency = -1;
        assert_eq!(r.check(), Err(RecordDefect::NegativeFrequency(-1)));
    }

    #[test]
    fn frequency_above_weekly_maximum_rejected() {
        let mut r = record("ATL", "LAX");
        r.frequency = MAX_WEEKLY_FREQUENCY;
        assert!(r.check().is_ok());
        r.frequency = MAX_WEEKLY_FREQUENCY + 1;
        assert_eq!(r.check(), Err(RecordDefect::FrequencyTooLarge(MAX_WEEKLY_FREQUENCY + 1)));
        r.frequency = i64::MAX;
        assert_eq!(r.check(), Err(RecordDefect::FrequencyTooLarge(i64::MAX)));
    }

    #[test]
    fn negative_and_nan_price_rejected() {
        let mut r = record("ATL", "LAX");
        r.avg_price = -0.01;
        assert_eq!(r.check(), Err(RecordDefect::NegativePrice(-0.01)));
        r.avg_price = f64::NAN;
        assert_eq!(r.check(), Err(RecordDefect::NonFinitePrice));
    }

    #[test]
    fn demand_outside_unit_interval_rejected() {
        let mut r = record("ATL", "LAX");
        r.demand_score = 1.01;
        assert_eq!(r.check(), Err(RecordDefect::DemandOutOfRange(1.01)));
        r.demand_score = f64::INFINITY;
        assert_eq!(r.check(), Err(RecordDefect::NonFiniteDemand));
    }

    #[test]
    fn self_loop_and_empty_codes_rejected() {
        assert_eq!(
            record("ATL", "ATL").check(),
            Err(RecordDefect::SelfLoop("ATL".to_string()))
        );
        assert_eq!(
            record(" ", "ATL").check(),
            Err(RecordDefect::EmptyAirportCode("origin"))
        );
        assert_eq!(
            record("ATL", "").check(),
            Err(RecordDefect::EmptyAirportCode("destination"))
        );
    }

    #[test]
    fn batch_reports_first_offending_index() {
        let mut bad = record("JFK", "BOS");
        bad.demand_score = 2.0;
        let mut worse = record("SEA", "SFO");
        worse.frequency = -5;
        let batch = vec![record("ATL", "LAX"), bad, worse];

        let err = validate_records(&batch).expect_err("batch must be rejected");
        assert_eq!(err.record_index(), Some(1));
    }

    #[test]
    fn empty_batch_is_valid() {
        assert!(validate_records(&[]).is_ok());
    }

    #[test]
    fn season_parses_case_insensitively() {
        assert_eq!("summer".parse::<Season>(), Ok(Season::Summer));
        assert_eq!("FALL".parse::<Season>(), Ok(Season::Fall));
        assert_eq!("Autumn".parse::<Season>(), Ok(Season::Fall));
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn record_json_shape() {
        let json = r#"{
            "origin": "ATL",
            "destination": "LAX",
            "airline": "Delta Air Lines",
            "frequency": 21,
            "avg_price": 412.5,
            "peak_season": "Winter",
            "demand_score": 0.82
        }"#;
        let r: RouteRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(r.peak_season, Season::Winter);
        assert_eq!(r.frequency, 21);
        assert!(r.scraped_at.is_none());
    }
}
