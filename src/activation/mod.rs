pub mod activation;

pub use activation::{ActivationFunction, ActivationCache, sigmoid, relu, sigmoid_backward, relu_backward};
