use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::dense::{linear_activation_backward, LayerCache};
use crate::loss::bce::BceLoss;
use crate::math::matrix::Matrix;

/// Gradients for layer `l`.
///
/// `da_prev` is the gradient with respect to the layer's input activation
/// `A_{l-1}`; `dw` and `db` match the shapes of `W_l` and `b_l`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGrads {
    pub da_prev: Matrix,
    pub dw: Matrix,
    pub db: Matrix,
}

/// Per-layer gradients, `layers[l - 1]` belonging to layer `l`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSet {
    pub layers: Vec<LayerGrads>,
}

impl GradientSet {
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Gradients of layer `l` in `1..=L`.
    pub fn layer(&self, l: usize) -> Option<&LayerGrads> {
        l.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    /// Gradient with respect to the network input `X`. Rarely needed.
    pub fn da0(&self) -> Option<&Matrix> {
        self.layers.first().map(|g| &g.da_prev)
    }
}

/// Backward pass through all layers recorded in `caches`.
///
/// Seeds with the cross-entropy derivative, runs the sigmoid output layer,
/// then walks the ReLU layers from `L-1` down to `1`.
pub fn l_model_backward(al: &Matrix, y: &Matrix, caches: &[LayerCache]) -> Result<GradientSet> {
    let num_layers = caches.len();
    if num_layers == 0 {
        return Err(NnError::DimensionalityAgreement {
            what: "forward caches",
            expected: 1,
            got: 0,
        });
    }
    // Labels are `(1, m)`; an `(m, 1)` column is transposed, anything else rejected.
    let y = if y.shape() == al.shape() {
        y.clone()
    } else if y.cols == 1 && (y.cols, y.rows) == al.shape() {
        y.transpose()
    } else {
        return Err(NnError::ShapeMismatch {
            op: "l_model_backward",
            expected: al.shape(),
            got: y.shape(),
        });
    };

    let mut da = BceLoss::derivative(al, &y)?;
    let mut layers = Vec::with_capacity(num_layers);

    for (i, cache) in caches.iter().enumerate().rev() {
        let activation = if i + 1 == num_layers {
            ActivationFunction::Sigmoid
        } else {
            ActivationFunction::ReLU
        };
        let (da_prev, dw, db) = linear_activation_backward(&da, cache, activation)?;
        da = da_prev.clone();
        layers.push(LayerGrads { da_prev, dw, db });
    }
    layers.reverse();

    debug!(layers = num_layers, examples = al.cols, "backward pass complete");
    Ok(GradientSet { layers })
}
