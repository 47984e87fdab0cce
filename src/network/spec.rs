use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::network::init::{initialize_parameters_deep, InitConfig};
use crate::network::params::{validate_layer_dims, ParameterSet};

/// A serializable description of a network: its layer sizes and how to
/// initialize it.
///
/// ```json
/// { "layer_dims": [5, 4, 3, 1], "init": { "seed": 3, "weight_scale": 0.01 } }
/// ```
///
/// `init` may be omitted, in which case [`InitConfig::default`] applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// `[n_0, .., n_L]`, input size first, output size last.
    pub layer_dims: Vec<usize>,
    #[serde(default)]
    pub init: InitConfig,
}

impl NetworkSpec {
    pub fn new(layer_dims: Vec<usize>) -> Self {
        NetworkSpec { layer_dims, init: InitConfig::default() }
    }

    /// Parses and validates a spec from JSON text.
    pub fn from_json(text: &str) -> Result<NetworkSpec> {
        let spec: NetworkSpec = serde_json::from_str(text)
            .map_err(|e| NnError::InvalidConfig(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NnError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        validate_layer_dims(&self.layer_dims)?;
        if !self.init.weight_scale.is_finite() || self.init.weight_scale <= 0.0 {
            return Err(NnError::InvalidConfig(format!(
                "weight_scale must be positive, got {}", self.init.weight_scale
            )));
        }
        Ok(())
    }

    /// Fresh parameters drawn from the configured seed.
    pub fn build(&self) -> Result<ParameterSet> {
        self.validate()?;
        initialize_parameters_deep(&self.layer_dims, self.init.weight_scale, &mut self.init.rng())
    }
}
