//! routenet-sim library.
//!
//! Deterministic synthetic route networks for demos, tests and benchmarks.
//! The same [`SampleConfig`] always produces the same records.
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for return types.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod generator;

pub use generator::{AIRLINES, HUB_AIRPORTS, SampleConfig, SampleNetwork};
