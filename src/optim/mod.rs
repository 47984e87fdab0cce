pub mod sgd;

pub use sgd::{Sgd, update_parameters};
