// Tests for parameter initialization: shapes, scale and reproducibility.

mod common;

use deepnet_core::network::init::{initialize_parameters_deep_default, initialize_parameters_default};
use deepnet_core::{initialize_parameters, initialize_parameters_deep, InitConfig, NnError};

#[test]
fn shallow_init_has_expected_shapes_and_zero_biases() {
    let params = initialize_parameters_default(3, 2, 1).unwrap();
    assert_eq!(params.num_layers(), 2);
    assert_eq!(params.layer(1).unwrap().weights.shape(), (2, 3));
    assert_eq!(params.layer(1).unwrap().biases.shape(), (2, 1));
    assert_eq!(params.layer(2).unwrap().weights.shape(), (1, 2));
    assert_eq!(params.layer(2).unwrap().biases.shape(), (1, 1));
    assert!(params.layers.iter().all(|l| l.biases.iter().all(|&b| b == 0.0)));
    assert!(params.layer(3).is_none());
    assert!(params.layer(0).is_none());
}

#[test]
fn deep_init_matches_layer_dims_at_every_layer() {
    for dims in [vec![2, 1], vec![5, 4, 3, 1], vec![10, 7, 7, 7, 2, 1], vec![1, 1, 1]] {
        let params = initialize_parameters_deep_default(&dims).unwrap();
        assert_eq!(params.num_layers(), dims.len() - 1);
        for l in 1..dims.len() {
            let layer = params.layer(l).unwrap();
            assert_eq!(layer.weights.shape(), (dims[l], dims[l - 1]));
            assert_eq!(layer.biases.shape(), (dims[l], 1));
        }
        params.validate().unwrap();
    }
}

#[test]
fn weights_are_small() {
    let params = initialize_parameters_deep_default(&[20, 10, 1]).unwrap();
    let max = params.layers.iter()
        .flat_map(|l| l.weights.iter())
        .fold(0.0_f64, |acc, &w| acc.max(w.abs()));
    assert!(max > 0.0);
    assert!(max < 0.1, "0.01-scaled normal draws should stay small, got {max}");
}

#[test]
fn same_seed_gives_same_parameters() {
    let dims = [4, 3, 1];
    assert_eq!(
        initialize_parameters_deep_default(&dims).unwrap(),
        initialize_parameters_deep_default(&dims).unwrap()
    );
    assert_eq!(
        initialize_parameters_default(4, 3, 1).unwrap(),
        initialize_parameters_default(4, 3, 1).unwrap()
    );

    let config = InitConfig::new(42);
    let a = initialize_parameters_deep(&dims, config.weight_scale, &mut config.rng()).unwrap();
    let b = initialize_parameters_deep(&dims, config.weight_scale, &mut config.rng()).unwrap();
    let c = initialize_parameters_deep(&dims, config.weight_scale, &mut InitConfig::new(43).rng()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn threaded_generator_advances_between_calls() {
    let mut rng = InitConfig::shallow().rng();
    let first = initialize_parameters(3, 2, 1, 0.01, &mut rng).unwrap();
    let second = initialize_parameters(3, 2, 1, 0.01, &mut rng).unwrap();
    assert_ne!(first, second);
}

#[test]
fn degenerate_layer_dims_are_rejected() {
    assert!(matches!(
        initialize_parameters_deep_default(&[3]),
        Err(NnError::InvalidLayerDims(_))
    ));
    assert!(matches!(
        initialize_parameters_deep_default(&[3, 0, 1]),
        Err(NnError::InvalidLayerDims(_))
    ));
    assert!(matches!(
        initialize_parameters_default(0, 2, 1),
        Err(NnError::InvalidLayerDims(_))
    ));
}
