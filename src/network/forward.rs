use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::dense::{linear_activation_forward, LayerCache};
use crate::math::matrix::Matrix;
use crate::network::params::ParameterSet;

/// Forward pass through all `L` layers.
///
/// `x` is `(n_0, m)`. Layers `1..L-1` use ReLU, layer `L` uses sigmoid.
/// Returns `AL` of shape `(1, m)` and one cache per layer in forward order.
pub fn l_model_forward(x: &Matrix, parameters: &ParameterSet) -> Result<(Matrix, Vec<LayerCache>)> {
    parameters.validate()?;
    if x.rows != parameters.input_size() {
        return Err(NnError::ShapeMismatch {
            op: "l_model_forward",
            expected: (parameters.input_size(), x.cols),
            got: x.shape(),
        });
    }

    let num_layers = parameters.num_layers();
    let mut caches = Vec::with_capacity(num_layers);
    let mut a = x.clone();

    for (i, layer) in parameters.layers.iter().enumerate() {
        let activation = if i + 1 == num_layers {
            ActivationFunction::Sigmoid
        } else {
            ActivationFunction::ReLU
        };
        let (next, cache) = linear_activation_forward(&a, &layer.weights, &layer.biases, activation)?;
        caches.push(cache);
        a = next;
    }

    a.expect_shape("l_model_forward", (1, x.cols))?;
    debug!(layers = num_layers, examples = x.cols, "forward pass complete");
    Ok((a, caches))
}

/// Runs the forward pass and thresholds `AL` at 0.5 into 0/1 labels.
pub fn predict(x: &Matrix, parameters: &ParameterSet) -> Result<Matrix> {
    let (al, _) = l_model_forward(x, parameters)?;
    Ok(al.map(|p| if p > 0.5 { 1.0 } else { 0.0 }))
}

/// Fraction of entries where `predictions` equals `labels`.
pub fn accuracy(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
    labels.expect_shape("accuracy", predictions.shape())?;
    let total = predictions.rows * predictions.cols;
    if total == 0 {
        return Ok(0.0);
    }
    let correct = predictions.iter().zip(labels.iter())
        .filter(|(p, y)| p == y)
        .count();
    Ok(correct as f64 / total as f64)
}
