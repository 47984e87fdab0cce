use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::params::{validate_layer_dims, LayerParams, ParameterSet};

/// Seed and weight scale for parameter initialization.
///
/// # Fields
/// - `seed`         — seed of the `StdRng` built by [`InitConfig::rng`]
/// - `weight_scale` — multiplier applied to standard-normal weight draws;
///                    small values keep early activations out of the
///                    saturated regions of sigmoid/ReLU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    pub seed: u64,
    pub weight_scale: f64,
}

impl InitConfig {
    pub const DEFAULT_WEIGHT_SCALE: f64 = 0.01;

    pub fn new(seed: u64) -> Self {
        InitConfig { seed, weight_scale: Self::DEFAULT_WEIGHT_SCALE }
    }

    /// Seed used for two-layer networks.
    pub fn shallow() -> Self {
        InitConfig::new(1)
    }

    /// Seed used for deep networks.
    pub fn deep() -> Self {
        InitConfig::new(3)
    }

    /// Fresh generator positioned at the configured seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig::deep()
    }
}

/// Two-layer network `n_x -> n_h -> n_y`.
///
/// Weights are `N(0, 1) * weight_scale`, biases are zero. Drawing order is
/// W1 then W2, so identical generator states give identical parameters.
pub fn initialize_parameters<R: Rng + ?Sized>(
    n_x: usize,
    n_h: usize,
    n_y: usize,
    weight_scale: f64,
    rng: &mut R,
) -> Result<ParameterSet> {
    validate_layer_dims(&[n_x, n_h, n_y])?;

    let w1 = Matrix::randn(n_h, n_x, weight_scale, rng);
    let b1 = Matrix::zeros(n_h, 1);
    let w2 = Matrix::randn(n_y, n_h, weight_scale, rng);
    let b2 = Matrix::zeros(n_y, 1);

    w1.expect_shape("initialize_parameters", (n_h, n_x))?;
    b1.expect_shape("initialize_parameters", (n_h, 1))?;
    w2.expect_shape("initialize_parameters", (n_y, n_h))?;
    b2.expect_shape("initialize_parameters", (n_y, 1))?;

    debug!(n_x, n_h, n_y, "initialized two-layer parameters");
    Ok(ParameterSet {
        layer_dims: vec![n_x, n_h, n_y],
        layers: vec![
            LayerParams { weights: w1, biases: b1 },
            LayerParams { weights: w2, biases: b2 },
        ],
    })
}

/// L-layer network for `layer_dims = [n_0, .., n_L]`.
pub fn initialize_parameters_deep<R: Rng + ?Sized>(
    layer_dims: &[usize],
    weight_scale: f64,
    rng: &mut R,
) -> Result<ParameterSet> {
    validate_layer_dims(layer_dims)?;

    let mut layers = Vec::with_capacity(layer_dims.len() - 1);
    for l in 1..layer_dims.len() {
        let weights = Matrix::randn(layer_dims[l], layer_dims[l - 1], weight_scale, rng);
        let biases = Matrix::zeros(layer_dims[l], 1);

        weights.expect_shape("initialize_parameters_deep", (layer_dims[l], layer_dims[l - 1]))?;
        biases.expect_shape("initialize_parameters_deep", (layer_dims[l], 1))?;
        layers.push(LayerParams { weights, biases });
    }

    debug!(?layer_dims, "initialized deep parameters");
    Ok(ParameterSet { layer_dims: layer_dims.to_vec(), layers })
}

/// [`initialize_parameters`] with the two-layer default seed and scale.
pub fn initialize_parameters_default(n_x: usize, n_h: usize, n_y: usize) -> Result<ParameterSet> {
    let config = InitConfig::shallow();
    initialize_parameters(n_x, n_h, n_y, config.weight_scale, &mut config.rng())
}

/// [`initialize_parameters_deep`] with the deep default seed and scale.
pub fn initialize_parameters_deep_default(layer_dims: &[usize]) -> Result<ParameterSet> {
    let config = InitConfig::deep();
    initialize_parameters_deep(layer_dims, config.weight_scale, &mut config.rng())
}
