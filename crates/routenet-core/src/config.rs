use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::DistributionBands;
use crate::metrics::HubScoreWeights;
use crate::summary::DEFAULT_TOP_HUBS;

/// Tunables for a network analysis run.
///
/// ```toml
/// top_hubs = 5
///
/// [bands]
/// frequency_low_below = 14
/// frequency_high_from = 28
///
/// [hub_score]
/// destinations_weight = 0.6
/// frequency_weight = 0.4
/// scale = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_top_hubs")]
    pub top_hubs: usize,
    #[serde(default)]
    pub bands: DistributionBands,
    #[serde(default)]
    pub hub_score: HubScoreWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_hubs: default_top_hubs(),
            bands: DistributionBands::default(),
            hub_score: HubScoreWeights::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a config from TOML text and validate its bands.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the bands are misordered.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse analysis config")?;
        config
            .bands
            .validate()
            .map_err(|reason| anyhow::anyhow!("Invalid distribution bands: {reason}"))?;
        Ok(config)
    }
}

/// Load an [`AnalysisConfig`] from `path`.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    if !path.exists() {
        return Ok(AnalysisConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    AnalysisConfig::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_top_hubs() -> usize {
    DEFAULT_TOP_HUBS
}
