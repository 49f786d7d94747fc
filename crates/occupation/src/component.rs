//! The occupation capability contract and scoped parameter sets.

use std::collections::BTreeMap;

use halo_catalog::Halo;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Named model parameters.
///
/// Every parameter name is scoped with a `{gal_type}.` prefix at insertion,
/// so two components modeling different subpopulations can never collide on
/// a shared physical parameter name (e.g. both Zheng07 components carry a
/// threshold-derived mass scale).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    values: BTreeMap<String, f64>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `{gal_type}.{name}`.
    pub fn insert_scoped(&mut self, gal_type: &str, name: &str, value: f64) {
        self.values.insert(format!("{gal_type}.{name}"), value);
    }

    /// Inserts an already-scoped name, used when merging component
    /// parameter sets into a composite view.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Occupation statistics for one galaxy subpopulation.
pub trait OccupationComponent {
    /// The subpopulation this component models, e.g. `"centrals"`.
    fn gal_type(&self) -> &str;

    /// First moment of the occupation distribution per halo.
    ///
    /// The result has the same length as `halos` and every entry is
    /// non-negative.
    fn mean_occupation(&self, halos: &[Halo]) -> Vec<f64>;

    /// Stochastic integer occupation draw per halo.
    fn mc_occupation(&self, halos: &[Halo], rng: &mut ChaChaRng) -> Vec<u32>;

    /// The component's scoped parameters.
    fn params(&self) -> &ParamSet;
}
