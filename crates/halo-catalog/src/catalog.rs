//! Catalog handles, identity, and the provider capability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::halo::Halo;

/// Errors produced while loading or validating halo catalog data.
///
/// These are data-level errors, distinct from the model configuration
/// errors raised by the composite-model factory.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("halo {halo_id}: column `{column}` has invalid value {value}")]
    BadColumn {
        halo_id: u64,
        column: &'static str,
        value: f64,
    },

    #[error(
        "no catalog found for simname `{simname}`, redshift {redshift}, \
         halo finder `{halo_finder}`, version `{version_name}`"
    )]
    NotFound {
        simname: String,
        redshift: f64,
        halo_finder: String,
        version_name: String,
    },
}

/// One of the four fields identifying a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityField {
    Simname,
    Redshift,
    HaloFinder,
    VersionName,
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simname => write!(f, "simname"),
            Self::Redshift => write!(f, "redshift"),
            Self::HaloFinder => write!(f, "halo-finder"),
            Self::VersionName => write!(f, "version_name"),
        }
    }
}

/// Identifies exactly one halo catalog snapshot.
///
/// Fields compare exactly, including `redshift`: two snapshots of the same
/// simulation at different redshifts are different catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIdentity {
    pub simname: String,
    pub redshift: f64,
    pub halo_finder: String,
    pub version_name: String,
}

impl CatalogIdentity {
    pub fn new(
        simname: impl Into<String>,
        redshift: f64,
        halo_finder: impl Into<String>,
        version_name: impl Into<String>,
    ) -> Self {
        Self {
            simname: simname.into(),
            redshift,
            halo_finder: halo_finder.into(),
            version_name: version_name.into(),
        }
    }

    /// Returns the first field on which `self` and `other` disagree.
    pub fn first_mismatch(&self, other: &CatalogIdentity) -> Option<IdentityField> {
        if self.simname != other.simname {
            Some(IdentityField::Simname)
        } else if self.redshift != other.redshift {
            Some(IdentityField::Redshift)
        } else if self.halo_finder != other.halo_finder {
            Some(IdentityField::HaloFinder)
        } else if self.version_name != other.version_name {
            Some(IdentityField::VersionName)
        } else {
            None
        }
    }
}

/// A read-only halo catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaloCatalog {
    identity: CatalogIdentity,
    /// Simulation particle mass (Msun/h).
    particle_mass: f64,
    /// Comoving box side length (Mpc/h).
    lbox: f64,
    halos: Vec<Halo>,
}

impl HaloCatalog {
    pub fn new(
        identity: CatalogIdentity,
        particle_mass: f64,
        lbox: f64,
        halos: Vec<Halo>,
    ) -> Self {
        Self {
            identity,
            particle_mass,
            lbox,
            halos,
        }
    }

    pub fn identity(&self) -> &CatalogIdentity {
        &self.identity
    }

    pub fn particle_mass(&self) -> f64 {
        self.particle_mass
    }

    pub fn lbox(&self) -> f64 {
        self.lbox
    }

    pub fn halos(&self) -> &[Halo] {
        &self.halos
    }

    pub fn len(&self) -> usize {
        self.halos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.halos.is_empty()
    }

    /// Checks every record for finite, positive mass, radius, and
    /// concentration. The first malformed record fails the whole catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        fn check(halo_id: u64, column: &'static str, value: f64) -> Result<(), CatalogError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(CatalogError::BadColumn {
                    halo_id,
                    column,
                    value,
                })
            }
        }

        for halo in &self.halos {
            check(halo.halo_id, "mvir", halo.mvir)?;
            check(halo.halo_id, "rvir", halo.rvir)?;
            check(halo.halo_id, "conc", halo.conc)?;
        }
        Ok(())
    }
}

/// Capability for resolving a catalog snapshot from its identifying fields.
///
/// Providers are injected explicitly wherever a catalog must be resolved;
/// there is no process-global catalog cache.
pub trait CatalogProvider {
    fn load(
        &self,
        simname: &str,
        redshift: f64,
        halo_finder: &str,
        version_name: &str,
    ) -> Result<HaloCatalog, CatalogError>;
}
