/// Everything that can go wrong inside the network core.
///
/// All variants are contract violations rather than transient conditions:
/// the call that detects one aborts and hands the error back untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NnError {
    /// A matrix did not have the shape an operation requires or guarantees.
    #[error("shape mismatch in {op}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// An activation name outside `{sigmoid, relu}`.
    #[error("unsupported activation `{0}` (expected `sigmoid` or `relu`)")]
    UnsupportedActivation(String),

    /// A value the loss cannot take a logarithm of, even after clamping.
    #[error("numeric domain error in {op}: value {value} is not in [0, 1]")]
    NumericDomain { op: &'static str, value: f64 },

    /// Layer counts of two collaborating structures disagree.
    #[error("{what}: expected {expected} layers, got {got}")]
    DimensionalityAgreement {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid layer dimensions: {0}")]
    InvalidLayerDims(String),

    #[error("invalid network config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NnError>;
