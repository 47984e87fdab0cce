// Tests for NetworkSpec / InitConfig parsing and building.

use deepnet_core::{InitConfig, NetworkSpec, NnError};

#[test]
fn parses_full_spec() {
    let spec = NetworkSpec::from_json(
        r#"{ "layer_dims": [5, 4, 3, 1], "init": { "seed": 7, "weight_scale": 0.02 } }"#,
    )
    .unwrap();
    assert_eq!(spec.layer_dims, vec![5, 4, 3, 1]);
    assert_eq!(spec.init.seed, 7);
    assert_eq!(spec.init.weight_scale, 0.02);
}

#[test]
fn missing_init_falls_back_to_defaults() {
    let spec = NetworkSpec::from_json(r#"{ "layer_dims": [3, 1] }"#).unwrap();
    assert_eq!(spec.init, InitConfig::default());
    assert_eq!(spec.init.weight_scale, InitConfig::DEFAULT_WEIGHT_SCALE);

    let partial = NetworkSpec::from_json(r#"{ "layer_dims": [3, 1], "init": { "seed": 9 } }"#).unwrap();
    assert_eq!(partial.init.seed, 9);
    assert_eq!(partial.init.weight_scale, InitConfig::DEFAULT_WEIGHT_SCALE);
}

#[test]
fn rejects_malformed_and_invalid_specs() {
    assert!(matches!(NetworkSpec::from_json("{"), Err(NnError::InvalidConfig(_))));
    assert!(matches!(
        NetworkSpec::from_json(r#"{ "layer_dims": [4] }"#),
        Err(NnError::InvalidLayerDims(_))
    ));
    assert!(matches!(
        NetworkSpec::from_json(r#"{ "layer_dims": [4, 1], "init": { "weight_scale": -1.0 } }"#),
        Err(NnError::InvalidConfig(_))
    ));
}

#[test]
fn build_is_reproducible_and_round_trips() {
    let spec = NetworkSpec::new(vec![4, 3, 1]);
    let params = spec.build().unwrap();
    assert_eq!(params, spec.build().unwrap());
    assert_eq!(params.num_layers(), 2);

    let reparsed = NetworkSpec::from_json(&spec.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, spec);
}
