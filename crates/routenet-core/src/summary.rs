//! Network summary assembly.
//!
//! [`analyze`] is the engine's single entry point: it validates the batch,
//! builds the route graph once, runs the graph analyzers on it and the
//! record-level analyzers on the raw records, and returns one immutable
//! [`NetworkSummary`]. It either returns a complete summary or fails the whole
//! call with an [`AnalysisError`].
//!
//! The computation is pure: the same input always yields a bit-identical
//! summary, so callers may memoize it keyed by [`NetworkSummary::content_hash`]
//! together with the [`AnalysisConfig`] used.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::analysis::coverage::{AirlineCoverage, airline_coverage};
use crate::analysis::distribution::{DistributionBuckets, bucket_records};
use crate::analysis::seasonal::{SeasonalSummary, summarize_seasons};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::graph::build::RouteGraph;
use crate::graph::connectivity::{ConnectivitySummary, connectivity};
use crate::metrics::{CentralityResult, HubAirport, centrality, rank_hubs};
use crate::model::{RouteRecord, validate_records};

/// Number of hubs reported when the caller does not say otherwise.
pub const DEFAULT_TOP_HUBS: usize = 5;

/// Complete structural report for one batch of route records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Number of records analyzed.
    pub record_count: usize,
    /// Distinct airports.
    pub node_count: usize,
    /// Distinct directed airport pairs.
    pub edge_count: usize,
    /// Top airports by betweenness.
    pub hubs: Vec<HubAirport>,
    pub centrality: CentralityResult,
    pub connectivity: ConnectivitySummary,
    pub distribution: DistributionBuckets,
    pub seasonal: SeasonalSummary,
    pub airline_coverage: Vec<AirlineCoverage>,
    /// BLAKE3 hash of the canonicalized route records.
    pub content_hash: String,
}

/// Runs analyses with a fixed [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct NetworkAnalyzer {
    config: AnalysisConfig,
}

impl NetworkAnalyzer {
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a batch of route records.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBands`] if the configured bands are
    /// misordered, or [`AnalysisError::InvalidRecord`] naming the first
    /// offending record; no partial summary is produced.
    #[instrument(skip(self, records), fields(records = records.len(), top_hubs = self.config.top_hubs))]
    pub fn analyze(&self, records: &[RouteRecord]) -> Result<NetworkSummary, AnalysisError> {
        self.config.bands.validate().map_err(AnalysisError::InvalidBands)?;
        validate_records(records)?;

        let rg = RouteGraph::from_valid_records(records);
        let centrality = centrality(&rg);
        let hubs = rank_hubs(&centrality, self.config.top_hubs);
        let connectivity = connectivity(&rg);

        let distribution = bucket_records(records, &self.config.bands);
        let seasonal = summarize_seasons(records);
        let airline_coverage = airline_coverage(records);

        info!(
            nodes = rg.node_count(),
            edges = rg.edge_count(),
            strongly_connected = connectivity.strongly_connected,
            "network analysis completed"
        );

        Ok(NetworkSummary {
            record_count: records.len(),
            node_count: rg.node_count(),
            edge_count: rg.edge_count(),
            hubs,
            centrality,
            connectivity,
            distribution,
            seasonal,
            airline_coverage,
            content_hash: rg.content_hash,
        })
    }
}

/// Analyze `records` with default bands, reporting the top `top_hubs` hubs.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidRecord`] if any record fails validation.
pub fn analyze(records: &[RouteRecord], top_hubs: usize) -> Result<NetworkSummary, AnalysisError> {
    NetworkAnalyzer::new(AnalysisConfig {
        top_hubs,
        ..AnalysisConfig::default()
    })
    .analyze(records)
}
