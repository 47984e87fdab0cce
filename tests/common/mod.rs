// Fixed inputs, labels and parameters shared by the integration tests.
#![allow(dead_code)]

use deepnet_core::{LayerParams, Matrix, ParameterSet};

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).expect("fixture rows must be rectangular")
}

/// `layer_dims = [5, 4, 3, 1]` with weights and biases from a fixed formula.
pub fn deep_parameters() -> ParameterSet {
    let layer_dims = vec![5, 4, 3, 1];
    let layers = (1..layer_dims.len())
        .map(|l| {
            let (rows, cols) = (layer_dims[l], layer_dims[l - 1]);
            let weights = Matrix::from_rows(
                (0..rows)
                    .map(|i| {
                        (0..cols)
                            .map(|j| (((i * 3 + j * 5 + l) % 11) as f64 - 5.0) * 0.1)
                            .collect()
                    })
                    .collect(),
            )
            .unwrap();
            let biases = Matrix::column((0..rows).map(|i| (i as f64 - 1.0) * 0.05 * l as f64).collect());
            LayerParams { weights, biases }
        })
        .collect();
    ParameterSet::new(layer_dims, layers).unwrap()
}

/// `(5, 4)` input for [`deep_parameters`].
pub fn deep_input() -> Matrix {
    matrix(
        (0..5)
            .map(|i| (0..4).map(|j| (((i * 4 + j) % 7) as f64 - 3.0) / 3.0).collect())
            .collect(),
    )
}

pub fn deep_labels() -> Matrix {
    Matrix::row(vec![1.0, 0.0, 1.0, 0.0])
}

/// Cost of [`deep_parameters`] on [`deep_input`] / [`deep_labels`].
pub const DEEP_COST: f64 = 0.7072910910299525;

/// `AL` of [`deep_parameters`] on [`deep_input`].
pub const DEEP_AL: [f64; 4] = [
    0.4826319904229496,
    0.4868780138177567,
    0.45536910462060326,
    0.4762678458734389,
];

/// `n_x = 3`, hidden size 2, one output. Every hidden pre-activation sits
/// well away from the ReLU kink on [`small_input`].
pub fn small_parameters() -> ParameterSet {
    ParameterSet::new(
        vec![3, 2, 1],
        vec![
            LayerParams {
                weights: matrix(vec![vec![0.4, -0.3, 0.2], vec![-0.5, 0.6, 0.1]]),
                biases: Matrix::column(vec![0.05, -0.1]),
            },
            LayerParams {
                weights: matrix(vec![vec![0.7, -0.9]]),
                biases: Matrix::column(vec![0.0]),
            },
        ],
    )
    .unwrap()
}

/// `(3, 2)` input for [`small_parameters`].
pub fn small_input() -> Matrix {
    matrix(vec![vec![1.0, -0.5], vec![0.3, 0.8], vec![-1.2, 0.4]])
}

pub fn small_labels() -> Matrix {
    Matrix::row(vec![1.0, 0.0])
}
