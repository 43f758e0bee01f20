//! Graph construction from route observations.
//!
//! # Overview
//!
//! Each [`RouteRecord`] contributes to exactly one directed edge keyed by its
//! `(origin, destination)` pair. Parallel airline-specific records collapse
//! into a single connectivity edge whose [`RouteEdge`] annotation aggregates
//! every contributing record:
//!
//! - `airlines`: set union of operating airlines,
//! - `total_frequency`: sum of weekly flights,
//! - `min_price` / `max_price` / `avg_price`: over the contributing fares.
//!
//! ## Determinism
//!
//! Records are first folded into an ordered map, then nodes are inserted in
//! ascending airport-code order and edges in ascending `(origin, destination)`
//! order. Fares are summed in sorted order. The resulting graph, node indices
//! included, is therefore identical for any permutation of the input.
//!
//! ## Cache Invalidation
//!
//! The graph carries a BLAKE3 hash over every record, canonicalized per edge:
//! the `(origin, destination)` key followed by each contributing record's
//! airline, frequency, fare, season and demand in sorted order. Any change to
//! an analyzed field changes the hash, while reordering the input does not.
//! Callers that memoize a [`crate::NetworkSummary`] can compare hashes to
//! decide whether the route data changed.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::AnalysisError;
use crate::model::{RouteRecord, validate_records};

// ---------------------------------------------------------------------------
// RouteEdge
// ---------------------------------------------------------------------------

/// Aggregated annotation of one directed airport pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEdge {
    /// Airlines serving this pair (sorted).
    pub airlines: BTreeSet<String>,
    /// Sum of weekly frequencies across contributing records.
    pub total_frequency: i64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    /// Number of records folded into this edge.
    pub record_count: usize,
}

/// Per-pair accumulator used while folding records.
#[derive(Debug, Default)]
struct EdgeAccumulator<'a> {
    airlines: BTreeSet<String>,
    total_frequency: i64,
    prices: Vec<f64>,
    members: Vec<&'a RouteRecord>,
}

impl<'a> EdgeAccumulator<'a> {
    fn push(&mut self, record: &'a RouteRecord) {
        self.airlines.insert(record.airline.clone());
        self.total_frequency += record.frequency;
        self.prices.push(record.avg_price);
        self.members.push(record);
    }

    /// Feed the contributing records into `hasher` in canonical order.
    fn hash_members(&mut self, hasher: &mut blake3::Hasher) {
        self.members.sort_by(|a, b| {
            a.airline
                .cmp(&b.airline)
                .then(a.frequency.cmp(&b.frequency))
                .then(a.avg_price.total_cmp(&b.avg_price))
                .then(a.peak_season.cmp(&b.peak_season))
                .then(a.demand_score.total_cmp(&b.demand_score))
        });
        for r in &self.members {
            hasher.update(r.airline.as_bytes());
            hasher.update(b"\x00");
            hasher.update(&r.frequency.to_le_bytes());
            hasher.update(&r.avg_price.to_bits().to_le_bytes());
            hasher.update(r.peak_season.as_str().as_bytes());
            hasher.update(b"\x00");
            hasher.update(&r.demand_score.to_bits().to_le_bytes());
        }
        hasher.update(b"\x01");
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(mut self) -> RouteEdge {
        self.prices.sort_by(f64::total_cmp);
        let min_price = self.prices.first().copied().unwrap_or(0.0);
        let max_price = self.prices.last().copied().unwrap_or(0.0);
        let record_count = self.prices.len();
        let avg_price = if record_count == 0 {
            0.0
        } else {
            self.prices.iter().sum::<f64>() / record_count as f64
        };

        RouteEdge {
            airlines: self.airlines,
            total_frequency: self.total_frequency,
            min_price,
            max_price,
            avg_price,
            record_count,
        }
    }
}

// ---------------------------------------------------------------------------
// RouteGraph
// ---------------------------------------------------------------------------

/// A directed route graph.
///
/// Nodes are airport codes. An edge `A → B` means at least one airline flies
/// from A to B. Every node is an endpoint of at least one edge.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    /// Directed graph: nodes = airport codes, edges = aggregated routes.
    pub graph: DiGraph<String, RouteEdge>,
    /// Mapping from airport code to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the canonicalized records, for cache invalidation.
    pub content_hash: String,
}

impl RouteGraph {
    /// Build a [`RouteGraph`] from a batch of route records.
    ///
    /// An empty batch yields an empty graph.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRecord`] if any record fails
    /// validation; nothing is built in that case.
    #[instrument(skip(records), fields(records = records.len()))]
    pub fn from_records(records: &[RouteRecord]) -> Result<Self, AnalysisError> {
        validate_records(records)?;
        Ok(Self::from_valid_records(records))
    }

    /// Build from records that already passed [`validate_records`].
    pub(crate) fn from_valid_records(records: &[RouteRecord]) -> Self {
        // Step 1: fold records into one accumulator per ordered pair.
        let mut pairs: BTreeMap<(&str, &str), EdgeAccumulator<'_>> = BTreeMap::new();
        for record in records {
            pairs
                .entry((record.origin.as_str(), record.destination.as_str()))
                .or_default()
                .push(record);
        }

        // Step 2: nodes in ascending code order.
        let codes: BTreeSet<&str> = pairs.keys().flat_map(|&(a, b)| [a, b]).collect();

        let mut graph = DiGraph::<String, RouteEdge>::with_capacity(codes.len(), pairs.len());
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(codes.len());

        for code in codes {
            let idx = graph.add_node(code.to_string());
            node_map.insert(code.to_string(), idx);
        }

        // Step 3: edges in ascending pair order.
        let mut hasher = blake3::Hasher::new();
        for ((origin, destination), mut acc) in pairs {
            hasher.update(origin.as_bytes());
            hasher.update(b"\x00");
            hasher.update(destination.as_bytes());
            hasher.update(b"\x00");
            acc.hash_members(&mut hasher);

            let (Some(&a), Some(&b)) = (node_map.get(origin), node_map.get(destination)) else {
                continue;
            };
            graph.add_edge(a, b, acc.finish());
        }
        let content_hash = format!("blake3:{}", hasher.finalize());

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "route graph built"
        );

        Self {
            graph,
            node_map,
            content_hash,
        }
    }

    /// Return the number of nodes (airports) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges (ordered airport pairs) in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for an airport code.
    #[must_use]
    pub fn node_index(&self, code: &str) -> Option<NodeIndex> {
        self.node_map.get(code).copied()
    }

    /// Return the airport code label for a node.
    #[must_use]
    pub fn airport(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Return the aggregated annotation of the `origin → destination` edge.
    #[must_use]
    pub fn route(&self, origin: &str, destination: &str) -> Option<&RouteEdge> {
        let a = self.node_index(origin)?;
        let b = self.node_index(destination)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordDefect;
    use crate::model::Season;

    fn rec(origin: &str, destination: &str, airline: &str, frequency: i64, price: f64) -> RouteRecord {
        RouteRecord::new(origin, destination, airline, frequency, price, Season::Summer, 0.5)
    }

    #[test]
    fn empty_input_produces_empty_graph() {
        let graph = RouteGraph::from_records(&[]).expect("build graph");
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        // Hash of empty edge set is stable.
        assert!(graph.content_hash.starts_with("blake3:"));
    }

    #[test]
    fn single_route_direction() {
        let graph = RouteGraph::from_records(&[rec("ATL", "LAX", "Delta", 10, 300.0)])
            .expect("build graph");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.node_index("ATL").expect("ATL node");
        let b = graph.node_index("LAX").expect("LAX node");
        assert!(graph.graph.contains_edge(a, b), "expected ATL → LAX");
        assert!(!graph.graph.contains_edge(b, a), "no reverse edge");
    }

    #[test]
    fn parallel_airlines_collapse_into_one_edge() {
        let records = vec![
            rec("ATL", "LAX", "Delta", 14, 420.0),
            rec("ATL", "LAX", "American", 7, 380.0),
            rec("ATL", "LAX", "Delta", 7, 460.0),
        ];
        let graph = RouteGraph::from_records(&records).expect("build graph");
        assert_eq!(graph.edge_count(), 1);

        let edge = graph.route("ATL", "LAX").expect("ATL → LAX edge");
        assert_eq!(
            edge.airlines.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["American", "Delta"]
        );
        assert_eq!(edge.total_frequency, 28);
        assert_eq!(edge.record_count, 3);
        assert!((edge.min_price - 380.0).abs() < 1e-10);
        assert!((edge.max_price - 460.0).abs() < 1e-10);
        assert!((edge.avg_price - 420.0).abs() < 1e-10);
    }

    #[test]
    fn opposite_directions_are_distinct_edges() {
        let records = vec![
            rec("ATL", "LAX", "Delta", 10, 300.0),
            rec("LAX", "ATL", "Delta", 10, 300.0),
        ];
        let graph = RouteGraph::from_records(&records).expect("build graph");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn node_indices_follow_code_order() {
        let records = vec![
            rec("SEA", "BOS", "Alaska", 7, 500.0),
            rec("ATL", "SEA", "Delta", 7, 500.0),
        ];
        let graph = RouteGraph::from_records(&records).expect("build graph");
        let labels: Vec<&str> = graph.graph.node_weights().map(String::as_str).collect();
        assert_eq!(labels, vec!["ATL", "BOS", "SEA"]);
    }

    #[test]
    fn permutation_does_not_change_graph() {
        let records = vec![
            rec("ATL", "LAX", "Delta", 14, 420.1),
            rec("JFK", "ATL", "JetBlue", 21, 199.9),
            rec("ATL", "LAX", "American", 7, 380.3),
            rec("LAX", "JFK", "United", 10, 510.7),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let a = RouteGraph::from_records(&records).expect("build graph");
        let b = RouteGraph::from_records(&reversed).expect("build graph");

        assert_eq!(a.content_hash, b.content_hash);
        let ea: Vec<_> = a.graph.edge_weights().cloned().collect();
        let eb: Vec<_> = b.graph.edge_weights().cloned().collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn content_hash_changes_with_edges() {
        let one = RouteGraph::from_records(&[rec("ATL", "LAX", "Delta", 10, 300.0)])
            .expect("build graph")
            .content_hash;
        let two = RouteGraph::from_records(&[
            rec("ATL", "LAX", "Delta", 10, 300.0),
            rec("LAX", "ATL", "Delta", 10, 300.0),
        ])
        .expect("build graph")
        .content_hash;

        assert_ne!(one, two, "hash must change when edges added");
    }

    #[test]
    fn content_hash_changes_with_record_data() {
        let hash = |records: &[RouteRecord]| {
            RouteGraph::from_records(records)
                .expect("build graph")
                .content_hash
        };
        let base = RouteRecord::new("ATL", "LAX", "Delta", 5, 250.0, Season::Summer, 0.3);
        let other = RouteRecord::new("ATL", "LAX", "United", 40, 900.0, Season::Winter, 0.9);
        assert_ne!(hash(&[base.clone()]), hash(&[other]));

        let mut season = base.clone();
        season.peak_season = Season::Fall;
        let mut demand = base.clone();
        demand.demand_score = 0.31;
        let mut frequency = base.clone();
        frequency.frequency = 6;
        let mut price = base.clone();
        price.avg_price = 250.01;

        let base_hash = hash(&[base.clone()]);
        for changed in [season, demand, frequency, price] {
            assert_ne!(base_hash, hash(&[changed]));
        }
        assert_eq!(base_hash, hash(&[base]), "hash is stable for equal data");
    }

    #[test]
    fn content_hash_ignores_order_within_an_edge() {
        let a = rec("ATL", "LAX", "Delta", 14, 420.0);
        let b = rec("ATL", "LAX", "American", 7, 380.0);
        let ab = RouteGraph::from_records(&[a.clone(), b.clone()]).expect("build graph");
        let ba = RouteGraph::from_records(&[b, a]).expect("build graph");
        assert_eq!(ab.content_hash, ba.content_hash);
    }

    #[test]
    fn invalid_record_rejects_whole_batch() {
        let records = vec![
            rec("ATL", "LAX", "Delta", 10, 300.0),
            rec("LAX", "JFK", "Delta", -2, 300.0),
        ];
        let err = RouteGraph::from_records(&records).expect_err("batch rejected");
        assert_eq!(
            err,
            AnalysisError::InvalidRecord {
                index: 1,
                defect: RecordDefect::NegativeFrequency(-2),
            }
        );
    }
}
