use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// The two nonlinearities a layer can apply.
///
/// Hidden layers use `ReLU`; the output layer uses `Sigmoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }

    /// Applies the activation to `z`, returning `A` and the cache its
    /// backward step needs.
    pub fn forward(&self, z: &Matrix) -> (Matrix, ActivationCache) {
        match self {
            ActivationFunction::Sigmoid => sigmoid(z),
            ActivationFunction::ReLU => relu(z),
        }
    }

    /// Turns `dA` into `dZ` using the cache from the matching forward call.
    pub fn backward(&self, da: &Matrix, cache: &ActivationCache) -> Result<Matrix> {
        match self {
            ActivationFunction::Sigmoid => sigmoid_backward(da, cache),
            ActivationFunction::ReLU => relu_backward(da, cache),
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NnError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "relu" => Ok(ActivationFunction::ReLU),
            other => Err(NnError::UnsupportedActivation(other.to_string())),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFunction::Sigmoid => f.write_str("sigmoid"),
            ActivationFunction::ReLU => f.write_str("relu"),
        }
    }
}

/// Pre-activation `Z` retained for the activation derivative.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationCache {
    pub z: Matrix,
}

pub fn sigmoid(z: &Matrix) -> (Matrix, ActivationCache) {
    let a = z.map(|x| ActivationFunction::Sigmoid.function(x));
    (a, ActivationCache { z: z.clone() })
}

pub fn relu(z: &Matrix) -> (Matrix, ActivationCache) {
    let a = z.map(|x| ActivationFunction::ReLU.function(x));
    (a, ActivationCache { z: z.clone() })
}

/// dZ = dA ⊙ σ(Z)(1 - σ(Z))
pub fn sigmoid_backward(da: &Matrix, cache: &ActivationCache) -> Result<Matrix> {
    da.hadamard(&cache.z.map(|x| ActivationFunction::Sigmoid.derivative(x)))
}

/// dZ = dA where Z > 0, else 0
pub fn relu_backward(da: &Matrix, cache: &ActivationCache) -> Result<Matrix> {
    da.hadamard(&cache.z.map(|x| ActivationFunction::ReLU.derivative(x)))
}
