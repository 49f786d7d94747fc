//! Model configuration errors.

use halo_catalog::{CatalogError, IdentityField};
use thiserror::Error;

use crate::blueprint::Feature;

/// Misuse of the composite-model API, detected synchronously at the point
/// of the offending call and before any model state is mutated.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("You did not pass any model features to the factory")]
    EmptyBlueprint,

    #[error("Subpopulation `{gal_type}` is missing its `{feature}` feature")]
    MissingFeature { gal_type: String, feature: Feature },

    #[error("Parameter `{name}` appears in more than one model component")]
    DuplicateParam { name: String },

    #[error("This model has no subpopulation named `{gal_type}`")]
    UnknownGalType { gal_type: String },

    #[error("`{name}` is not a prebuilt model blueprint")]
    UnknownPreset { name: String },

    #[error("Sample threshold must be a finite number, got {threshold}")]
    BadThreshold { threshold: f64 },

    #[error(
        "populate_mock could not resolve a halo catalog: pass a catalog \
         handle or the full set of identifying fields"
    )]
    NoCatalog,

    #[error(
        "The halo catalog passed to populate_mock disagrees with the \
         {field} given in the same call"
    )]
    CatalogDisagreement { field: IdentityField },

    #[error(
        "Inconsistency between the {field} already bound to the existing \
         mock and the {field} requested in this call"
    )]
    BindingMismatch { field: IdentityField },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
