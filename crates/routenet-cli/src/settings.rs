//! Analysis config resolution for the CLI.
//!
//! Lookup order: `--config <path>`, then `./routenet.toml`, then
//! `<user config dir>/routenet/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use routenet_core::{AnalysisConfig, load_config};
use tracing::debug;

const PROJECT_CONFIG: &str = "routenet.toml";

/// The config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("failed to load config {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Pick the config file to load, if any.
///
/// An explicit path always wins, even if it does not exist, so that a typo
/// surfaces as an error instead of silently falling back to defaults.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG);
    if project.is_file() {
        return Some(project);
    }

    user_config_dir
        .map(|dir| dir.join("routenet").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Resolve and load the analysis config.
pub fn load_analysis_config(explicit: Option<&Path>) -> Result<AnalysisConfig, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let user_dir = dirs::config_dir();

    let Some(path) = resolve_config_path(explicit, &cwd, user_dir.as_deref()) else {
        debug!("no config file found, using defaults");
        return Ok(AnalysisConfig::default());
    };

    if !path.exists() {
        return Err(ConfigError::Missing(path));
    }

    debug!(path = %path.display(), "loading analysis config");
    load_config(&path).map_err(|e| ConfigError::Invalid {
        path,
        source: e.into(),
    })
}
