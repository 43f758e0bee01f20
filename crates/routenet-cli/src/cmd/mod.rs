//! Subcommand implementations.
//!
//! Each module exposes an `…Args` struct for clap and a `run_…` function that
//! loads its input, calls into `routenet-core`, and renders through
//! [`crate::output`].

pub mod airlines;
pub mod airport;
pub mod analyze;
pub mod completions;
pub mod distribution;
pub mod sample;
pub mod seasonal;
