pub mod bce;

pub use bce::{BceLoss, compute_cost};
