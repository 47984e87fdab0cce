pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::{
    linear_forward, linear_activation_forward, linear_backward, linear_activation_backward,
    LinearCache, LayerCache,
};
pub use network::{
    initialize_parameters, initialize_parameters_deep, l_model_forward, l_model_backward,
    predict, GradientSet, InitConfig, LayerParams, NetworkSpec, ParameterSet,
};
pub use loss::bce::{BceLoss, compute_cost};
pub use optim::sgd::{Sgd, update_parameters};
