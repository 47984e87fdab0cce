use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// Weight matrix `(n_l, n_{l-1})` and bias column `(n_l, 1)` of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Parameters of an L-layer network together with the layer dimensions
/// `[n_0, .., n_L]` they were built for.
///
/// `layers[l - 1]` holds layer `l`; use [`ParameterSet::layer`] for the
/// 1-indexed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub layer_dims: Vec<usize>,
    pub layers: Vec<LayerParams>,
}

impl ParameterSet {
    /// Builds a parameter set and checks every pair against `layer_dims`.
    pub fn new(layer_dims: Vec<usize>, layers: Vec<LayerParams>) -> Result<ParameterSet> {
        let params = ParameterSet { layer_dims, layers };
        params.validate()?;
        Ok(params)
    }

    /// Number of weight/bias pairs, i.e. `L`.
    pub fn num_layers(&self) -> usize {
        self.layer_dims.len().saturating_sub(1)
    }

    /// Layer `l` in `1..=L`.
    pub fn layer(&self, l: usize) -> Option<&LayerParams> {
        l.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    pub fn input_size(&self) -> usize {
        self.layer_dims.first().copied().unwrap_or(0)
    }

    /// Layer count and every weight/bias shape must agree with `layer_dims`.
    pub fn validate(&self) -> Result<()> {
        validate_layer_dims(&self.layer_dims)?;
        if self.layers.len() != self.num_layers() {
            return Err(NnError::DimensionalityAgreement {
                what: "parameter set",
                expected: self.num_layers(),
                got: self.layers.len(),
            });
        }
        for (l, layer) in self.layers.iter().enumerate() {
            let (n_out, n_in) = (self.layer_dims[l + 1], self.layer_dims[l]);
            layer.weights.expect_shape("parameter set weights", (n_out, n_in))?;
            layer.biases.expect_shape("parameter set biases", (n_out, 1))?;
        }
        Ok(())
    }
}

/// At least an input and an output size, all positive.
pub fn validate_layer_dims(layer_dims: &[usize]) -> Result<()> {
    if layer_dims.len() < 2 {
        return Err(NnError::InvalidLayerDims(format!(
            "need at least 2 entries, got {}", layer_dims.len()
        )));
    }
    if let Some(pos) = layer_dims.iter().position(|&n| n == 0) {
        return Err(NnError::InvalidLayerDims(format!("layer {pos} has size 0")));
    }
    Ok(())
}
