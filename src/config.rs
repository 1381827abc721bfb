//! Network generation settings, loaded from TOML.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GeneratorParams;
use crate::types::{MycoError, MycoResult};

/// Settings for the network the CLI generates and analyzes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Number of cells.
    pub nodes: usize,
    /// Probability that any given pair of cells is connected.
    pub connection_probability: f64,
    /// Whether edges carry random weights.
    pub weighted: bool,
    /// Lower bound (inclusive) for edge weights.
    pub min_weight: f64,
    /// Upper bound (exclusive) for edge weights.
    pub max_weight: f64,
    /// RNG seed for reproducible networks.
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            nodes: 200,
            connection_probability: 0.03,
            weighted: true,
            min_weight: 0.1,
            max_weight: 5.0,
            seed: 42,
        }
    }
}

impl NetworkConfig {
    /// Load from a TOML file; missing keys take their defaults.
    pub fn load(path: &Path) -> MycoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> MycoResult<Self> {
        toml::from_str(content).map_err(|e| MycoError::Config(e.to_string()))
    }

    /// Generator parameters for this configuration.
    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            num_nodes: self.nodes,
            connection_probability: self.connection_probability,
            weight_range: self.weighted.then_some((self.min_weight, self.max_weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = NetworkConfig::from_toml("nodes = 12\nweighted = false\n").unwrap();
        assert_eq!(config.nodes, 12);
        assert!(!config.weighted);
        assert_eq!(config.seed, 42);
        assert_eq!(config.generator_params().weight_range, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            NetworkConfig::from_toml("colour = \"blue\"\n"),
            Err(MycoError::Config(_))
        ));
    }
}
