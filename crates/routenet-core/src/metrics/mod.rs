//! Centrality metrics for the route graph.
//!
//! # Overview
//!
//! Each metric answers a different question about an airport's role:
//!
//! - **Degree centrality** (`degree`): How many airports does it connect to
//!   directly, in either direction?
//! - **Betweenness centrality** (`betweenness`): How often is it the
//!   connecting stop on a shortest itinerary between two other airports?
//! - **Hubs** (`hubs`): Which airports rank highest by betweenness, and how
//!   does a caller-weighted blend of destinations and frequency score them?
//!
//! # Usage
//!
//! ```rust,ignore
//! use routenet_core::graph::RouteGraph;
//! use routenet_core::metrics::{centrality, rank_hubs};
//!
//! let rg = RouteGraph::from_records(&records)?;
//! let c = centrality(&rg);
//! let top = rank_hubs(&c, 5);
//! ```

pub mod betweenness;
pub mod degree;
pub mod hubs;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::graph::build::RouteGraph;

pub use betweenness::betweenness_centrality;
pub use degree::{DegreeInfo, degree_centrality};
pub use hubs::{HubAirport, HubScoreWeights, hub_score, rank_hubs};

/// Centrality scores of one airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeCentrality {
    pub in_degree: usize,
    pub out_degree: usize,
    /// `(in + out) / (n - 1)`; 0.0 below two airports.
    ///
    /// Ranges over `[0, 2]`, not `[0, 1]`: an airport with service both to
    /// and from every other airport scores 2.0.
    pub degree: f64,
    /// Raw (unnormalized) Brandes betweenness.
    pub betweenness: f64,
}

/// Centrality scores of every airport, keyed by airport code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityResult {
    pub nodes: BTreeMap<String, NodeCentrality>,
}

impl CentralityResult {
    #[must_use]
    pub fn get(&self, airport: &str) -> Option<&NodeCentrality> {
        self.nodes.get(airport)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Compute degree and betweenness centrality for every airport.
#[must_use]
#[instrument(skip(rg), fields(nodes = rg.node_count()))]
pub fn centrality(rg: &RouteGraph) -> CentralityResult {
    let degrees = degree_centrality(rg);
    let betweenness = betweenness::betweenness_scores(&rg.graph);

    let nodes = rg
        .graph
        .node_indices()
        .filter_map(|idx| {
            let code = rg.graph.node_weight(idx)?;
            let d = degrees.get(code)?;
            Some((
                code.clone(),
                NodeCentrality {
                    in_degree: d.in_degree,
                    out_degree: d.out_degree,
                    degree: d.centrality,
                    betweenness: betweenness[idx.index()],
                },
            ))
        })
        .collect();

    CentralityResult { nodes }
}
