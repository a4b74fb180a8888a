//! Loading `LiftConfig` from JSON and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use lift_core::{Floor, LiftConfig};
use tracing::debug;

/// Parse a JSON config document.  Missing fields take their defaults.
///
/// ```json
/// { "max_floor": 10 }
/// ```
pub fn from_json(json: &str) -> Result<LiftConfig> {
    serde_json::from_str(json).context("invalid lift config JSON")
}

/// The default config, replaced by `path` if given, then by `max_floor`.
/// The result is validated.
pub fn load(path: Option<&Path>, max_floor: Option<i32>) -> Result<LiftConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            from_json(&json).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => LiftConfig::default(),
    };
    if let Some(n) = max_floor {
        config.max_floor = Floor(n);
    }
    config.validate()?;
    debug!(max_floor = %config.max_floor, "config loaded");
    Ok(config)
}
