//! This module contains the per-engine options: which operations are enabled
//! and what they cost.

use std::path::{Path, PathBuf};

use pa_types::Cost;
use serde::{Deserialize, Serialize};

use crate::{cost_model::EditCosts, operation::EditOp};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cost of {op} must be non-negative, got {cost}")]
    NegativeCost { op: EditOp, cost: Cost },
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for a single [`EditDistance`](crate::engine::EditDistance) computation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Whether adjacent symbols may be swapped in one operation.
    pub twiddle: bool,
    /// Whether the remainder of the starting word may be discarded at the end.
    pub kill: bool,
    pub costs: EditCosts,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            twiddle: true,
            kill: true,
            costs: EditCosts::default(),
        }
    }
}

impl EngineConfig {
    /// Plain Levenshtein: twiddle and kill disabled.
    pub fn levenshtein() -> Self {
        Self {
            twiddle: false,
            kill: false,
            costs: EditCosts::default(),
        }
    }

    pub fn with_twiddle(mut self, enabled: bool) -> Self {
        self.twiddle = enabled;
        self
    }

    pub fn with_kill(mut self, enabled: bool) -> Self {
        self.kill = enabled;
        self
    }

    pub fn with_costs(mut self, costs: EditCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_cost(mut self, op: EditOp, cost: Cost) -> Result<Self, ConfigError> {
        self.costs = self.costs.with(op, cost)?;
        Ok(self)
    }

    pub fn cost(&self, op: EditOp) -> Cost {
        self.costs.cost(op)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = EngineConfig::default();
        assert!(config.twiddle);
        assert!(config.kill);
        assert_eq!(config.costs, EditCosts::default());
    }

    #[test]
    fn parse_partial_json() {
        let config =
            EngineConfig::from_json(r#"{ "kill": false, "costs": { "twiddle": 1 } }"#).unwrap();
        assert!(config.twiddle);
        assert!(!config.kill);
        assert_eq!(config.cost(EditOp::Twiddle), 1);
        assert_eq!(config.cost(EditOp::Replace), 1);
    }

    #[test]
    fn reject_bad_json() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "costs": { "copy": -1 } }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(EngineConfig::from_json(r#"{ "twidle": true }"#).is_err());
    }

    #[test]
    fn json_round_trip_of_non_default_config() {
        let config = EngineConfig::levenshtein().with_cost(EditOp::Insert, 2).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn missing_file() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/costs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
