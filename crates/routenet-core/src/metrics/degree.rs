//! Degree centrality.
//!
//! `degree(v) = (in_degree(v) + out_degree(v)) / (node_count - 1)`, with every
//! score 0.0 when the graph has fewer than two airports. Degrees count
//! collapsed route edges, not individual airline records, so a graph without
//! self-loops keeps each in- and out-degree at most `node_count - 1` and the
//! score within `[0, 2]`. It reaches 1.0 for an airport with one-way service
//! to (or from) every other airport.

use std::collections::BTreeMap;

use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::graph::build::RouteGraph;

/// Raw and normalized degree of one airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeInfo {
    /// Airports with a route into this one.
    pub in_degree: usize,
    /// Airports this one has a route to.
    pub out_degree: usize,
    /// `(in + out) / (n - 1)`.
    pub centrality: f64,
}

/// Compute degree centrality for all airports.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(rg: &RouteGraph) -> BTreeMap<String, DegreeInfo> {
    let g = &rg.graph;
    let n = g.node_count();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    g.node_indices()
        .filter_map(|idx| {
            let code = g.node_weight(idx)?;
            let in_degree = g.neighbors_directed(idx, Direction::Incoming).count();
            let out_degree = g.neighbors_directed(idx, Direction::Outgoing).count();
            let centrality = (in_degree + out_degree) as f64 * scale;

            Some((
                code.clone(),
                DegreeInfo {
                    in_degree,
                    out_degree,
                    centrality,
                },
            ))
        })
        .collect()
}
