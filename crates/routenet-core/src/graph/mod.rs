//! Route graph module.
//!
//! # Overview
//!
//! This module turns a batch of [`crate::RouteRecord`]s into a petgraph-based
//! directed graph keyed by airport code and computes its connectivity
//! statistics. The graph feeds the centrality metrics in [`crate::metrics`].
//!
//! ## Pipeline
//!
//! ```text
//! &[RouteRecord]
//!        ↓  build::RouteGraph::from_records()
//! RouteGraph (DiGraph<String, RouteEdge>, one edge per ordered pair)
//!        ↓  connectivity::connectivity()
//! ConnectivitySummary (path lengths, density, strong connectivity, …)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust,ignore
//! use routenet_core::graph::{RouteGraph, connectivity};
//!
//! let rg = RouteGraph::from_records(&records)?;
//! let c = connectivity(&rg);
//!
//! println!("airports={} routes={} density={:.3} strongly_connected={}",
//!     c.node_count, c.edge_count, c.density, c.strongly_connected);
//! ```

pub mod build;
pub mod connectivity;

pub use build::{RouteEdge, RouteGraph};
pub use connectivity::{
    ConnectivitySummary, connectivity, is_strongly_connected, shortest_path_lengths,
};
