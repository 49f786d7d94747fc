//! Composite galaxy-halo models and mock catalog generation.
//!
//! A `ModelBlueprint` maps subpopulation features to configured occupation
//! and phase-space components. `CompositeModel::assemble` validates and
//! consumes a blueprint; `populate_mock` binds the model to one halo
//! catalog snapshot and regenerates a synthetic galaxy table from Monte
//! Carlo draws. Rebinding to an inconsistent catalog is rejected before any
//! state is touched.
//!
//! ```ignore
//! use halo_catalog::FakeProvider;
//! use mock_generator::{CompositeModel, ModelOptions, PopulateRequest};
//!
//! let mut model = CompositeModel::prebuilt("zheng07", ModelOptions::default())?;
//! let provider = FakeProvider::default();
//! let request = PopulateRequest::new().with_seed(42).with_simname("fake")
//!     .with_redshift(0.0).with_halo_finder("rockstar")
//!     .with_version_name("alpha_version0");
//! model.populate_mock(&request, &provider)?;
//! let mock = model.mock().unwrap();
//! ```

pub mod blueprint;
pub mod error;
pub mod factory;
pub mod mock;
pub mod presets;

#[cfg(test)]
mod blueprint_test;
#[cfg(test)]
mod factory_test;

pub use blueprint::{Feature, FeatureKey, ModelBlueprint, ModelFeature, ModelOptions};
pub use error::ConfigurationError;
pub use factory::CompositeModel;
pub use mock::{Galaxy, GalaxyTable, MockContext, PopulateRequest};
pub use presets::{prebuilt_blueprint, zheng07_blueprint};
