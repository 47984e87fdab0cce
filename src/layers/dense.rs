use tracing::trace;

use crate::activation::activation::{ActivationCache, ActivationFunction};
use crate::error::Result;
use crate::math::matrix::Matrix;

/// Snapshot of a layer's input and parameters taken during the forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCache {
    pub a_prev: Matrix,
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Everything one layer's backward step needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCache {
    pub linear: LinearCache,
    pub activation: ActivationCache,
}

/// Z = W·A + b, with `b` broadcast across the example columns.
pub fn linear_forward(a: &Matrix, weights: &Matrix, biases: &Matrix) -> Result<(Matrix, LinearCache)> {
    let z = weights.dot(a)?.add_column(biases)?;
    z.expect_shape("linear_forward", (weights.rows, a.cols))?;

    let cache = LinearCache {
        a_prev: a.clone(),
        weights: weights.clone(),
        biases: biases.clone(),
    };
    Ok((z, cache))
}

pub fn linear_activation_forward(
    a_prev: &Matrix,
    weights: &Matrix,
    biases: &Matrix,
    activation: ActivationFunction,
) -> Result<(Matrix, LayerCache)> {
    let (z, linear) = linear_forward(a_prev, weights, biases)?;
    let (a, activation_cache) = activation.forward(&z);
    a.expect_shape("linear_activation_forward", (weights.rows, a_prev.cols))?;
    trace!(%activation, shape = ?a.shape(), "layer forward");

    Ok((a, LayerCache { linear, activation: activation_cache }))
}

/// Same as [`linear_activation_forward`] but selects the activation by name,
/// failing with `UnsupportedActivation` for anything but `sigmoid`/`relu`.
pub fn linear_activation_forward_named(
    a_prev: &Matrix,
    weights: &Matrix,
    biases: &Matrix,
    activation: &str,
) -> Result<(Matrix, LayerCache)> {
    linear_activation_forward(a_prev, weights, biases, activation.parse()?)
}

/// Returns `(dA_prev, dW, db)`, each shaped like the value it differentiates.
pub fn linear_backward(dz: &Matrix, cache: &LinearCache) -> Result<(Matrix, Matrix, Matrix)> {
    let LinearCache { a_prev, weights, biases } = cache;
    dz.expect_shape("linear_backward", (weights.rows, a_prev.cols))?;
    let m = a_prev.cols as f64;

    let dw = dz.dot(&a_prev.transpose())?.scale(1.0 / m);
    let db = dz.sum_rows().scale(1.0 / m);
    let da_prev = weights.transpose().dot(dz)?;

    da_prev.expect_shape("linear_backward", a_prev.shape())?;
    dw.expect_shape("linear_backward", weights.shape())?;
    db.expect_shape("linear_backward", biases.shape())?;
    Ok((da_prev, dw, db))
}

pub fn linear_activation_backward(
    da: &Matrix,
    cache: &LayerCache,
    activation: ActivationFunction,
) -> Result<(Matrix, Matrix, Matrix)> {
    let dz = activation.backward(da, &cache.activation)?;
    trace!(%activation, shape = ?dz.shape(), "layer backward");
    linear_backward(&dz, &cache.linear)
}

/// Name-selected variant of [`linear_activation_backward`].
pub fn linear_activation_backward_named(
    da: &Matrix,
    cache: &LayerCache,
    activation: &str,
) -> Result<(Matrix, Matrix, Matrix)> {
    linear_activation_backward(da, cache, activation.parse()?)
}
