pub mod dense;

pub use dense::{LinearCache, LayerCache};
