use halo_catalog::{Halo, HaloCatalog};
use occupation::{OccupationComponent, ParamSet};
use phase_space::TrivialProfile;
use rand_chacha::ChaChaRng;

use crate::blueprint::{Feature, ModelBlueprint, ModelOptions};
use crate::error::ConfigurationError;
use crate::factory::CompositeModel;
use crate::presets::zheng07_blueprint;

/// Minimal occupation stub with a caller-chosen (possibly unscoped)
/// parameter name, for exercising factory validation paths.
struct StubOccupation {
    gal_type: String,
    params: ParamSet,
}

impl StubOccupation {
    fn new(gal_type: &str, param_name: &str) -> Self {
        let mut params = ParamSet::new();
        params.insert(param_name, 1.0);
        Self {
            gal_type: gal_type.to_string(),
            params,
        }
    }
}

impl OccupationComponent for StubOccupation {
    fn gal_type(&self) -> &str {
        &self.gal_type
    }

    fn mean_occupation(&self, halos: &[Halo]) -> Vec<f64> {
        vec![1.0; halos.len()]
    }

    fn mc_occupation(&self, halos: &[Halo], _rng: &mut ChaChaRng) -> Vec<u32> {
        vec![1; halos.len()]
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }
}

#[test]
fn empty_blueprint_is_rejected() {
    let err = CompositeModel::assemble(ModelBlueprint::new(), ModelOptions::default())
        .err()
        .expect("Empty blueprint must fail");
    assert!(matches!(err, ConfigurationError::EmptyBlueprint));
    assert!(err
        .to_string()
        .contains("You did not pass any model features to the factory"));
}

#[test]
fn missing_profile_feature_is_rejected() {
    let mut blueprint = ModelBlueprint::new();
    blueprint.insert_occupation("centrals", Box::new(StubOccupation::new("centrals", "p")));

    match CompositeModel::assemble(blueprint, ModelOptions::default()) {
        Err(ConfigurationError::MissingFeature { gal_type, feature }) => {
            assert_eq!(gal_type, "centrals");
            assert_eq!(feature, Feature::Profile);
        }
        _ => panic!("Expected MissingFeature"),
    }
}

#[test]
fn missing_occupation_feature_is_rejected() {
    let mut blueprint = ModelBlueprint::new();
    blueprint.insert_profile("satellites", Box::new(TrivialProfile::new("satellites")));

    match CompositeModel::assemble(blueprint, ModelOptions::default()) {
        Err(ConfigurationError::MissingFeature { gal_type, feature }) => {
            assert_eq!(gal_type, "satellites");
            assert_eq!(feature, Feature::Occupation);
        }
        _ => panic!("Expected MissingFeature"),
    }
}

#[test]
fn colliding_parameter_names_are_rejected() {
    // Two subpopulations whose components forgot to scope a shared name
    let mut blueprint = ModelBlueprint::new();
    blueprint.insert_occupation("centrals", Box::new(StubOccupation::new("centrals", "log_mmin")));
    blueprint.insert_profile("centrals", Box::new(TrivialProfile::new("centrals")));
    blueprint.insert_occupation(
        "satellites",
        Box::new(StubOccupation::new("satellites", "log_mmin")),
    );
    blueprint.insert_profile("satellites", Box::new(TrivialProfile::new("satellites")));

    match CompositeModel::assemble(blueprint, ModelOptions::default()) {
        Err(ConfigurationError::DuplicateParam { name }) => assert_eq!(name, "log_mmin"),
        _ => panic!("Expected DuplicateParam"),
    }
}

#[test]
fn zheng07_model_assembles_with_scoped_params() {
    let model = CompositeModel::assemble(
        zheng07_blueprint(&ModelOptions::default()),
        ModelOptions::default(),
    )
    .unwrap();

    let gal_types: Vec<&str> = model.gal_types().collect();
    assert_eq!(gal_types, vec!["centrals", "satellites"]);

    let names: Vec<&str> = model.param_set().names().collect();
    assert_eq!(
        names,
        vec![
            "centrals.log_mmin",
            "centrals.sigma_logm",
            "satellites.alpha",
            "satellites.log_m0",
            "satellites.log_m1",
        ]
    );
}

#[test]
fn prebuilt_factory_looks_up_presets() {
    assert!(CompositeModel::prebuilt("zheng07", ModelOptions::default()).is_ok());
    assert!(matches!(
        CompositeModel::prebuilt("no_such_model", ModelOptions::default()),
        Err(ConfigurationError::UnknownPreset { .. })
    ));
}

#[test]
fn mean_occupation_dispatches_per_subpopulation() {
    let model = CompositeModel::prebuilt("zheng07", ModelOptions::default()).unwrap();
    let catalog = HaloCatalog::fake(42, 100);

    for gal_type in ["centrals", "satellites"] {
        let means = model.mean_occupation(gal_type, catalog.halos()).unwrap();
        assert_eq!(means.len(), catalog.len());
        assert!(means.iter().all(|&m| m >= 0.0));
    }
}

#[test]
fn mean_occupation_rejects_unknown_subpopulation() {
    let model = CompositeModel::prebuilt("zheng07", ModelOptions::default()).unwrap();
    let catalog = HaloCatalog::fake(42, 10);

    match model.mean_occupation("orphans", catalog.halos()) {
        Err(ConfigurationError::UnknownGalType { gal_type }) => assert_eq!(gal_type, "orphans"),
        _ => panic!("Expected UnknownGalType"),
    }
}

#[test]
fn mock_is_absent_until_first_populate() {
    let model = CompositeModel::prebuilt("zheng07", ModelOptions::default()).unwrap();
    assert!(model.mock().is_none());
    assert!(model.mock_context().is_none());
}
