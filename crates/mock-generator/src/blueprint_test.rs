use crate::blueprint::{
    Feature, FeatureKey, ModelOptions, DEFAULT_LUMINOSITY_THRESHOLD, DEFAULT_NUM_PTCL_REQUIREMENT,
};
use crate::error::ConfigurationError;
use crate::presets::{prebuilt_blueprint, zheng07_blueprint};

#[test]
fn zheng07_blueprint_has_exactly_four_features() {
    let blueprint = zheng07_blueprint(&ModelOptions::default());
    assert_eq!(blueprint.len(), 4);

    let keys: Vec<String> = blueprint.keys().map(|k| k.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "centrals_occupation",
            "centrals_profile",
            "satellites_occupation",
            "satellites_profile",
        ]
    );
}

#[test]
fn zheng07_blueprint_works_for_any_finite_threshold() {
    for threshold in [-22.0, -20.3, -19.0, -17.0, 0.0] {
        let blueprint = zheng07_blueprint(&ModelOptions::with_threshold(threshold));
        assert_eq!(blueprint.len(), 4, "Threshold {} failed", threshold);
    }
}

#[test]
fn feature_keys_order_centrals_before_satellites() {
    let centrals = FeatureKey::profile("centrals");
    let satellites = FeatureKey::occupation("satellites");
    assert!(centrals < satellites);

    // Within a subpopulation, occupation sorts before profile
    assert!(FeatureKey::occupation("centrals") < FeatureKey::profile("centrals"));
}

#[test]
fn feature_key_display_matches_convention() {
    assert_eq!(FeatureKey::occupation("centrals").to_string(), "centrals_occupation");
    assert_eq!(FeatureKey::profile("satellites").to_string(), "satellites_profile");
    assert_eq!(Feature::Occupation.to_string(), "occupation");
    assert_eq!(Feature::Profile.to_string(), "profile");
}

#[test]
fn prebuilt_lookup_rejects_unknown_presets() {
    match prebuilt_blueprint("leauthaud11", &ModelOptions::default()) {
        Err(ConfigurationError::UnknownPreset { name }) => assert_eq!(name, "leauthaud11"),
        _ => panic!("Expected UnknownPreset"),
    }
}

#[test]
fn prebuilt_lookup_rejects_non_finite_thresholds() {
    for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            prebuilt_blueprint("zheng07", &ModelOptions::with_threshold(threshold)),
            Err(ConfigurationError::BadThreshold { .. })
        ));
    }
}

#[test]
fn default_options_match_conventions() {
    let options = ModelOptions::default();
    assert_eq!(options.threshold, DEFAULT_LUMINOSITY_THRESHOLD);
    assert_eq!(options.num_ptcl_requirement, DEFAULT_NUM_PTCL_REQUIREMENT);

    let custom = ModelOptions::with_threshold(-21.0);
    assert_eq!(custom.threshold, -21.0);
    assert_eq!(custom.num_ptcl_requirement, DEFAULT_NUM_PTCL_REQUIREMENT);
}
