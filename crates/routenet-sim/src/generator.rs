//! Seeded generator for the demonstration route network.
//!
//! Every ordered pair of distinct hubs gets between one and four airlines.
//! Each airline on a pair gets its own record with a random base fare
//! (discounted for low-cost carriers, marked up for legacy carriers), weekly
//! frequency, peak season and demand score.

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use routenet_core::{RouteRecord, Season};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Major hub airports, in generation order.
pub const HUB_AIRPORTS: [&str; 10] = [
    "ATL", "LAX", "ORD", "DFW", "DEN", "JFK", "SFO", "SEA", "MIA", "BOS",
];

/// Carriers that may operate a generated route.
pub const AIRLINES: [&str; 8] = [
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Southwest Airlines",
    "JetBlue Airways",
    "Alaska Airlines",
    "Spirit Airlines",
    "Frontier Airlines",
];

const LOW_COST: [&str; 2] = ["Spirit Airlines", "Frontier Airlines"];
const LEGACY: [&str; 3] = ["American Airlines", "Delta Air Lines", "United Airlines"];

const LOW_COST_FACTOR: f64 = 0.7;
const LEGACY_FACTOR: f64 = 1.1;

/// Parameters for [`SampleNetwork::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// RNG seed.
    pub seed: u64,
    /// Use only the first N entries of [`HUB_AIRPORTS`].
    pub airport_limit: usize,
    /// Maximum airlines per ordered pair (at least one is always chosen).
    pub max_airlines_per_route: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            airport_limit: HUB_AIRPORTS.len(),
            max_airlines_per_route: 4,
        }
    }
}

impl SampleConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Validate configuration before generating.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.airport_limit > HUB_AIRPORTS.len() {
            bail!(
                "airport_limit must be <= {} (got {})",
                HUB_AIRPORTS.len(),
                self.airport_limit
            );
        }
        if self.max_airlines_per_route == 0 || self.max_airlines_per_route > AIRLINES.len() {
            bail!(
                "max_airlines_per_route must be in 1..={} (got {})",
                AIRLINES.len(),
                self.max_airlines_per_route
            );
        }
        Ok(())
    }
}

/// Generator entry point.
pub struct SampleNetwork;

impl SampleNetwork {
    /// Generate the sample route records for `config`.
    ///
    /// Fewer than two airports yields an empty network.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails [`SampleConfig::validate`].
    #[instrument(skip(config), fields(seed = config.seed, airports = config.airport_limit))]
    pub fn generate(config: &SampleConfig) -> Result<Vec<RouteRecord>> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let hubs = &HUB_AIRPORTS[..config.airport_limit];
        let mut records = Vec::new();

        for (i, origin) in hubs.iter().enumerate() {
            for destination in &hubs[i + 1..] {
                for (from, to) in [(origin, destination), (destination, origin)] {
                    let count = rng.gen_range(1..=config.max_airlines_per_route);
                    let carriers: Vec<&str> =
                        AIRLINES.choose_multiple(&mut rng, count).copied().collect();
                    debug!(from, to, carriers = carriers.len(), "generating route");

                    for airline in carriers {
                        records.push(sample_record(&mut rng, from, to, airline));
                    }
                }
            }
        }

        info!(records = records.len(), "sample network generated");
        Ok(records)
    }
}

fn sample_record(rng: &mut StdRng, origin: &str, destination: &str, airline: &str) -> RouteRecord {
    let mut price = f64::from(rng.gen_range(200_u32..=800));
    if LOW_COST.contains(&airline) {
        price *= LOW_COST_FACTOR;
    } else if LEGACY.contains(&airline) {
        price *= LEGACY_FACTOR;
    }

    let frequency = rng.gen_range(7_i64..=35);
    let season = Season::ALL[rng.gen_range(0..Season::ALL.len())];
    let demand = rng.gen_range(0.3_f64..1.0);

    RouteRecord::new(
        origin,
        destination,
        airline,
        frequency,
        round_to(price, 2),
        season,
        round_to(demand, 2),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
