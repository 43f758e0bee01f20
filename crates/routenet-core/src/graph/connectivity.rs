//! Reachability and path-length statistics for the route graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: airports and ordered airport pairs.
//! - **avg_shortest_path_length**: mean hop distance over every ordered pair
//!   `(s, t)`, `s ≠ t`, for which `t` is reachable from `s`. Unreachable pairs
//!   and self-pairs are excluded. Defined as 0.0 when no such pair exists.
//! - **reachable_pairs**: number of pairs contributing to the average.
//! - **diameter**: the largest finite hop distance (0 when none).
//! - **density**: `edge_count / (node_count * (node_count - 1))`. A graph
//!   without self-loops therefore stays within `[0, 1]`. Zero for graphs
//!   with 0 or 1 node.
//! - **strongly_connected**: every airport reaches every other airport.
//!   Empty and single-node graphs are trivially strongly connected.
//! - **scc_count** / **weak_component_count**: strongly and weakly connected
//!   component counts.
//!
//! All path lengths are unweighted hop counts.

use std::collections::{BTreeMap, VecDeque};

use petgraph::{
    Direction,
    algo::{connected_components, tarjan_scc},
    graph::{DiGraph, NodeIndex},
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::graph::build::RouteGraph;

// ---------------------------------------------------------------------------
// ConnectivitySummary
// ---------------------------------------------------------------------------

/// Connectivity statistics for a [`RouteGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivitySummary {
    /// Number of airports.
    pub node_count: usize,
    /// Number of directed airport pairs with service.
    pub edge_count: usize,
    /// Mean hop distance over reachable ordered pairs (0.0 if none).
    pub avg_shortest_path_length: f64,
    /// Ordered pairs `(s, t)`, `s ≠ t`, with a path from `s` to `t`.
    pub reachable_pairs: usize,
    /// Largest finite hop distance.
    pub diameter: usize,
    /// `edge_count / (node_count * (node_count - 1))`, 0.0 below two nodes.
    pub density: f64,
    pub strongly_connected: bool,
    pub scc_count: usize,
    pub weak_component_count: usize,
}

/// Compute connectivity statistics for a route graph.
///
/// Runs one BFS per source airport; the passes are independent and fan out
/// across the rayon pool. Partial sums are integers, so the merge is exact.
#[must_use]
#[instrument(skip(rg), fields(nodes = rg.node_count(), edges = rg.edge_count()))]
pub fn connectivity(rg: &RouteGraph) -> ConnectivitySummary {
    let g = &rg.graph;
    let node_count = g.node_count();
    let edge_count = g.edge_count();

    let (distance_sum, reachable_pairs, diameter) = g
        .node_indices()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|s| {
            bfs_distances(g, s)
                .into_iter()
                .flatten()
                .filter(|&d| d > 0)
                .fold((0_u64, 0_usize, 0_usize), |(sum, count, max), d| {
                    (sum + d as u64, count + 1, max.max(d))
                })
        })
        .reduce(
            || (0, 0, 0),
            |(s1, c1, m1), (s2, c2, m2)| (s1 + s2, c1 + c2, m1.max(m2)),
        );

    let avg_shortest_path_length = compute_average(distance_sum, reachable_pairs);
    let density = compute_density(node_count, edge_count);

    let scc_count = tarjan_scc(g).len();
    let strongly_connected = scc_count <= 1;
    let weak_component_count = connected_components(g);

    debug!(
        reachable_pairs,
        diameter, scc_count, strongly_connected, "connectivity computed"
    );

    ConnectivitySummary {
        node_count,
        edge_count,
        avg_shortest_path_length,
        reachable_pairs,
        diameter,
        density,
        strongly_connected,
        scc_count,
        weak_component_count,
    }
}

/// Return `true` if every airport can reach every other airport.
///
/// Uses one forward and one backward traversal from an arbitrary airport.
#[must_use]
pub fn is_strongly_connected(rg: &RouteGraph) -> bool {
    let g = &rg.graph;
    let Some(start) = g.node_indices().next() else {
        return true;
    };
    let n = g.node_count();

    reach_count(g, start, Direction::Outgoing) == n
        && reach_count(g, start, Direction::Incoming) == n
}

/// Hop distances from `source` to every airport it can reach.
///
/// The source itself is not included. Returns `None` for an unknown code.
#[must_use]
pub fn shortest_path_lengths(rg: &RouteGraph, source: &str) -> Option<BTreeMap<String, usize>> {
    let s = rg.node_index(source)?;
    let g = &rg.graph;

    let lengths = bfs_distances(g, s)
        .into_iter()
        .enumerate()
        .filter_map(|(i, d)| {
            let d = d.filter(|&d| d > 0)?;
            let code = g.node_weight(NodeIndex::new(i))?;
            Some((code.clone(), d))
        })
        .collect();

    Some(lengths)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Unweighted BFS over outgoing edges. `dist[i]` is `None` when unreachable.
fn bfs_distances<E>(g: &DiGraph<String, E>, s: NodeIndex) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; g.node_count()];
    dist[s.index()] = Some(0);

    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        let Some(dv) = dist[v.index()] else { continue };
        for w in g.neighbors_directed(v, Direction::Outgoing) {
            if dist[w.index()].is_none() {
                dist[w.index()] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Number of nodes reachable from `start` (inclusive) following `dir`.
fn reach_count<E>(g: &DiGraph<String, E>, start: NodeIndex, dir: Direction) -> usize {
    let mut visited = vec![false; g.node_count()];
    let mut stack = vec![start];
    let mut count = 0usize;

    while let Some(node) = stack.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        count += 1;

        for neighbor in g.neighbors_directed(node, dir) {
            if !visited[neighbor.index()] {
                stack.push(neighbor);
            }
        }
    }

    count
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

#[allow(clippy::cast_precision_loss)]
fn compute_average(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0_f64;
    }
    sum as f64 / count as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
