//! Model blueprints: the contract between component builders and the
//! composite-model factory.

use std::collections::BTreeMap;

use occupation::OccupationComponent;
use phase_space::PhaseSpaceComponent;

/// Conventional luminosity threshold of the modeled galaxy sample
/// (r-band absolute magnitude).
pub const DEFAULT_LUMINOSITY_THRESHOLD: f64 = -20.0;

/// Conventional halo-mass completeness cut, in units of the simulation
/// particle mass.
pub const DEFAULT_NUM_PTCL_REQUIREMENT: f64 = 300.0;

/// Explicit model configuration, injected at blueprint-build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOptions {
    /// Luminosity threshold of the galaxy sample (magnitude-like, so
    /// conventionally negative).
    pub threshold: f64,

    /// Default halo-mass completeness cut in particle-mass units.
    pub num_ptcl_requirement: f64,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LUMINOSITY_THRESHOLD,
            num_ptcl_requirement: DEFAULT_NUM_PTCL_REQUIREMENT,
        }
    }
}

impl ModelOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// The two feature slots every subpopulation must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    Occupation,
    Profile,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupation => write!(f, "occupation"),
            Self::Profile => write!(f, "profile"),
        }
    }
}

/// Identifies one feature of one subpopulation, e.g. `centrals_occupation`.
///
/// Keys order by subpopulation name first, so `centrals` features always
/// sort before `satellites` features and mock population runs in a fixed,
/// reproducible order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeatureKey {
    pub gal_type: String,
    pub feature: Feature,
}

impl FeatureKey {
    pub fn occupation(gal_type: impl Into<String>) -> Self {
        Self {
            gal_type: gal_type.into(),
            feature: Feature::Occupation,
        }
    }

    pub fn profile(gal_type: impl Into<String>) -> Self {
        Self {
            gal_type: gal_type.into(),
            feature: Feature::Profile,
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.gal_type, self.feature)
    }
}

/// A configured component instance filling one feature slot.
pub enum ModelFeature {
    Occupation(Box<dyn OccupationComponent>),
    Profile(Box<dyn PhaseSpaceComponent>),
}

/// An ordered mapping from feature keys to configured components.
///
/// Blueprints are assembled by builder functions (see `presets`) and
/// consumed by `CompositeModel::assemble`, which takes exclusive ownership
/// of every component.
#[derive(Default)]
pub struct ModelBlueprint {
    features: BTreeMap<FeatureKey, ModelFeature>,
}

impl ModelBlueprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_occupation(
        &mut self,
        gal_type: impl Into<String>,
        component: Box<dyn OccupationComponent>,
    ) {
        self.features.insert(
            FeatureKey::occupation(gal_type),
            ModelFeature::Occupation(component),
        );
    }

    pub fn insert_profile(
        &mut self,
        gal_type: impl Into<String>,
        component: Box<dyn PhaseSpaceComponent>,
    ) {
        self.features
            .insert(FeatureKey::profile(gal_type), ModelFeature::Profile(component));
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FeatureKey> {
        self.features.keys()
    }
}

impl IntoIterator for ModelBlueprint {
    type Item = (FeatureKey, ModelFeature);
    type IntoIter = std::collections::btree_map::IntoIter<FeatureKey, ModelFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}
