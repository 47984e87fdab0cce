use tracing::debug;

use crate::error::{NnError, Result};
use crate::network::backward::GradientSet;
use crate::network::params::ParameterSet;

/// Plain gradient descent: `θ ← θ - lr·∇θ`.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns updated parameters, leaving `parameters` untouched.
    pub fn update_parameters(&self, parameters: &ParameterSet, grads: &GradientSet) -> Result<ParameterSet> {
        let mut updated = parameters.clone();
        self.step(&mut updated, grads)?;
        Ok(updated)
    }

    /// Applies one update in place. On error `parameters` is left unchanged.
    pub fn step(&self, parameters: &mut ParameterSet, grads: &GradientSet) -> Result<()> {
        parameters.validate()?;
        if grads.num_layers() != parameters.num_layers() {
            return Err(NnError::DimensionalityAgreement {
                what: "gradient set",
                expected: parameters.num_layers(),
                got: grads.num_layers(),
            });
        }

        // Compute every layer first so a shape error cannot leave a partial update.
        let lr = self.learning_rate;
        let updated = parameters.layers.iter().zip(grads.layers.iter())
            .map(|(layer, g)| {
                let weights = layer.weights.zip_map(&g.dw, "update_parameters", |w, dw| w - lr * dw)?;
                let biases = layer.biases.zip_map(&g.db, "update_parameters", |b, db| b - lr * db)?;
                Ok((weights, biases))
            })
            .collect::<Result<Vec<_>>>()?;

        for (layer, (weights, biases)) in parameters.layers.iter_mut().zip(updated) {
            layer.weights = weights;
            layer.biases = biases;
        }
        debug!(layers = parameters.num_layers(), lr, "applied gradient step");
        Ok(())
    }
}

/// One gradient-descent step with `learning_rate`.
pub fn update_parameters(parameters: &ParameterSet, grads: &GradientSet, learning_rate: f64) -> Result<ParameterSet> {
    Sgd::new(learning_rate).update_parameters(parameters, grads)
}
