//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often an airport lies on shortest
//! paths between other pairs of airports. High-betweenness airports are the
//! connecting hubs of the network: removing one lengthens or breaks many
//! itineraries.
//!
//! # Algorithm
//!
//! We implement Brandes' algorithm (2001) for unweighted graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E) for unweighted graphs.
//!
//! The per-source passes are independent and run on the rayon pool. Each
//! pass yields its own dependency vector; vectors are summed in source-index
//! order afterwards so the floating-point result does not depend on thread
//! scheduling.
//!
//! # Output
//!
//! Scores are **not** normalized; callers can normalize by dividing by
//! `(n-1)*(n-2)` for directed graphs where `n` is the node count.

use std::collections::{BTreeMap, VecDeque};

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use rayon::prelude::*;
use tracing::instrument;

use crate::graph::build::RouteGraph;

/// Compute betweenness centrality for every airport in the graph.
///
/// # Returns
///
/// A `BTreeMap<String, f64>` mapping each airport code to its raw
/// betweenness score. Airports that are never an intermediate hop on a
/// shortest path receive 0.0. Empty graphs return an empty map.
#[must_use]
#[instrument(skip(rg), fields(nodes = rg.node_count()))]
pub fn betweenness_centrality(rg: &RouteGraph) -> BTreeMap<String, f64> {
    let g = &rg.graph;
    let scores = betweenness_scores(g);

    g.node_indices()
        .filter_map(|idx| {
            let code = g.node_weight(idx)?;
            Some((code.clone(), scores[idx.index()]))
        })
        .collect()
}

/// Node-indexed betweenness scores.
pub(crate) fn betweenness_scores<E: Sync>(g: &DiGraph<String, E>) -> Vec<f64> {
    let n = g.node_count();
    if n == 0 {
        return Vec::new();
    }

    let sources: Vec<NodeIndex> = g.node_indices().collect();
    let partials: Vec<Vec<f64>> = sources
        .into_par_iter()
        .map(|s| single_source_dependencies(g, s))
        .collect();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];
    for delta in partials {
        for (acc, d) in cb.iter_mut().zip(delta) {
            *acc += d;
        }
    }

    cb
}

/// One Brandes pass: dependency of `s` on every other node.
///
/// The returned vector is zero at index `s`.
fn single_source_dependencies<E>(g: &DiGraph<String, E>, s: NodeIndex) -> Vec<f64> {
    let n = g.node_count();
    let si = s.index();

    // Stack: nodes in order of discovery (farthest popped first).
    let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

    // Predecessor lists: predecessors[w] = list of nodes that immediately
    // precede w on shortest paths from s.
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

    // sigma[t]: number of shortest paths from s to t.
    let mut sigma: Vec<f64> = vec![0.0; n];
    sigma[si] = 1.0;

    // dist[t]: distance from s to t (-1 = unvisited).
    let mut dist: Vec<i64> = vec![-1; n];
    dist[si] = 0;

    // BFS queue.
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        let vi = v.index();
        stack.push(v);

        for w in g.neighbors_directed(v, Direction::Outgoing) {
            let wi = w.index();

            // First visit to w?
            if dist[wi] < 0 {
                dist[wi] = dist[vi] + 1;
                queue.push_back(w);
            }

            // Shortest path to w via v?
            if dist[wi] == dist[vi] + 1 {
                sigma[wi] += sigma[vi];
                predecessors[wi].push(v);
            }
        }
    }

    // Accumulate dependencies in reverse BFS order.
    let mut delta: Vec<f64> = vec![0.0; n];

    while let Some(w) = stack.pop() {
        let wi = w.index();

        for &v in &predecessors[wi] {
            let vi = v.index();
            if sigma[wi] > 0.0 {
                delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
            }
        }
    }

    delta[si] = 0.0;
    delta
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
