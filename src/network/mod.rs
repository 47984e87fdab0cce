pub mod params;
pub mod init;
pub mod forward;
pub mod backward;
pub mod spec;

pub use params::{LayerParams, ParameterSet};
pub use init::{initialize_parameters, initialize_parameters_deep, InitConfig};
pub use forward::{l_model_forward, predict, accuracy};
pub use backward::{l_model_backward, GradientSet, LayerGrads};
pub use spec::NetworkSpec;
