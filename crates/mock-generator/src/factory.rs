//! The composite-model factory.

use std::collections::{BTreeMap, BTreeSet};

use halo_catalog::Halo;
use occupation::{OccupationComponent, ParamSet};
use phase_space::PhaseSpaceComponent;

use crate::blueprint::{Feature, ModelBlueprint, ModelFeature, ModelOptions};
use crate::error::ConfigurationError;
use crate::mock::{GalaxyTable, MockContext, MockState};
use crate::presets::prebuilt_blueprint;

/// One subpopulation's composed components.
pub(crate) struct Subpopulation {
    pub occupation: Box<dyn OccupationComponent>,
    pub profile: Box<dyn PhaseSpaceComponent>,
}

/// A composite galaxy-halo model assembled from a blueprint.
///
/// The model owns its component instances exclusively and dispatches
/// unified operations per subpopulation. It carries zero or one bound mock
/// (see `populate_mock`).
pub struct CompositeModel {
    pub(crate) options: ModelOptions,
    pub(crate) subpopulations: BTreeMap<String, Subpopulation>,
    params: ParamSet,
    pub(crate) state: MockState,
}

impl CompositeModel {
    /// Consumes a blueprint and assembles a composite model.
    ///
    /// Fails if the blueprint is empty, if any subpopulation is missing its
    /// occupation or profile feature, or if two components collide on a
    /// parameter name.
    pub fn assemble(
        blueprint: ModelBlueprint,
        options: ModelOptions,
    ) -> Result<Self, ConfigurationError> {
        if blueprint.is_empty() {
            return Err(ConfigurationError::EmptyBlueprint);
        }

        let mut occupations: BTreeMap<String, Box<dyn OccupationComponent>> = BTreeMap::new();
        let mut profiles: BTreeMap<String, Box<dyn PhaseSpaceComponent>> = BTreeMap::new();
        for (key, feature) in blueprint {
            match feature {
                ModelFeature::Occupation(component) => {
                    occupations.insert(key.gal_type, component);
                }
                ModelFeature::Profile(component) => {
                    profiles.insert(key.gal_type, component);
                }
            }
        }

        let gal_types: BTreeSet<String> = occupations
            .keys()
            .chain(profiles.keys())
            .cloned()
            .collect();

        let mut subpopulations = BTreeMap::new();
        for gal_type in gal_types {
            let occupation =
                occupations
                    .remove(&gal_type)
                    .ok_or_else(|| ConfigurationError::MissingFeature {
                        gal_type: gal_type.clone(),
                        feature: Feature::Occupation,
                    })?;
            let profile =
                profiles
                    .remove(&gal_type)
                    .ok_or_else(|| ConfigurationError::MissingFeature {
                        gal_type: gal_type.clone(),
                        feature: Feature::Profile,
                    })?;
            subpopulations.insert(
                gal_type,
                Subpopulation {
                    occupation,
                    profile,
                },
            );
        }

        // Component parameter namespaces are scoped per subpopulation at
        // construction; any residual collision is a composition error.
        let mut params = ParamSet::new();
        for subpopulation in subpopulations.values() {
            for (name, value) in subpopulation.occupation.params().iter() {
                if params.get(name).is_some() {
                    return Err(ConfigurationError::DuplicateParam {
                        name: name.to_string(),
                    });
                }
                params.insert(name, value);
            }
        }

        Ok(Self {
            options,
            subpopulations,
            params,
            state: MockState::Unbound,
        })
    }

    /// Assembles a composite model from a named preset blueprint, e.g.
    /// `"zheng07"`.
    pub fn prebuilt(name: &str, options: ModelOptions) -> Result<Self, ConfigurationError> {
        let blueprint = prebuilt_blueprint(name, &options)?;
        Self::assemble(blueprint, options)
    }

    pub fn options(&self) -> &ModelOptions {
        &self.options
    }

    /// Subpopulation names in their fixed population order.
    pub fn gal_types(&self) -> impl Iterator<Item = &str> {
        self.subpopulations.keys().map(String::as_str)
    }

    /// The merged view over every component's scoped parameters.
    pub fn param_set(&self) -> &ParamSet {
        &self.params
    }

    /// First moment of the occupation distribution per halo for one
    /// subpopulation. The result has the same length as `halos`.
    pub fn mean_occupation(
        &self,
        gal_type: &str,
        halos: &[Halo],
    ) -> Result<Vec<f64>, ConfigurationError> {
        let subpopulation = self.subpopulations.get(gal_type).ok_or_else(|| {
            ConfigurationError::UnknownGalType {
                gal_type: gal_type.to_string(),
            }
        })?;
        Ok(subpopulation.occupation.mean_occupation(halos))
    }

    /// The current mock galaxy table, absent until the first successful
    /// `populate_mock` call.
    pub fn mock(&self) -> Option<&GalaxyTable> {
        match &self.state {
            MockState::Bound(context) => Some(context.galaxies()),
            MockState::Unbound => None,
        }
    }

    /// The bound mock context, absent until the first successful
    /// `populate_mock` call.
    pub fn mock_context(&self) -> Option<&MockContext> {
        match &self.state {
            MockState::Bound(context) => Some(context),
            MockState::Unbound => None,
        }
    }

    /// Discards the bound mock, returning the model to its unbound state so
    /// it may be bound to a different catalog.
    pub fn clear_mock(&mut self) {
        self.state = MockState::Unbound;
    }
}
