//! Mock binding and catalog population.
//!
//! `populate_mock` binds a composite model to exactly one halo catalog
//! snapshot and regenerates the mock galaxy table from fresh Monte Carlo
//! draws. Once bound, a model only repopulates against the same snapshot;
//! any identifying field that disagrees with the bound context fails the
//! call before a catalog is loaded or a draw is made.

use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use halo_catalog::{CatalogIdentity, CatalogProvider, Halo, HaloCatalog, IdentityField};

use crate::error::ConfigurationError;
use crate::factory::CompositeModel;

/// One synthetic galaxy row.
///
/// `halo_id` is a back-reference into the mock's surviving halo table, not
/// ownership of the halo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Galaxy {
    pub gal_type: String,
    pub halo_id: u64,
    pub halo_mvir: f64,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
}

/// The mock's product: an ordered galaxy table, regenerated in full on
/// every successful `populate_mock` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalaxyTable {
    galaxies: Vec<Galaxy>,
}

impl GalaxyTable {
    pub fn new(galaxies: Vec<Galaxy>) -> Self {
        Self { galaxies }
    }

    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    pub fn len(&self) -> usize {
        self.galaxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galaxies.is_empty()
    }

    /// Number of rows tagged with `gal_type`.
    pub fn count_gal_type(&self, gal_type: &str) -> usize {
        self.galaxies
            .iter()
            .filter(|g| g.gal_type == gal_type)
            .count()
    }
}

/// The halo catalog context a model is currently bound to.
pub struct MockContext {
    identity: CatalogIdentity,
    particle_mass: f64,
    /// The completeness cut used for the current mock. Per-call overrides
    /// land here without touching the model's configured default.
    num_ptcl_requirement: f64,
    catalog: HaloCatalog,
    /// Halos surviving the completeness cut of the current population run.
    halos: Vec<Halo>,
    galaxies: GalaxyTable,
}

impl MockContext {
    pub fn identity(&self) -> &CatalogIdentity {
        &self.identity
    }

    pub fn particle_mass(&self) -> f64 {
        self.particle_mass
    }

    pub fn num_ptcl_requirement(&self) -> f64 {
        self.num_ptcl_requirement
    }

    /// The full bound catalog, before the completeness cut.
    pub fn catalog(&self) -> &HaloCatalog {
        &self.catalog
    }

    /// Halos surviving the completeness cut of the current mock.
    pub fn halos(&self) -> &[Halo] {
        &self.halos
    }

    pub fn galaxies(&self) -> &GalaxyTable {
        &self.galaxies
    }
}

/// Bound-or-unbound mock state. Bound-to-bound transitions are only legal
/// when the new context matches the old one field-by-field.
pub(crate) enum MockState {
    Unbound,
    Bound(MockContext),
}

/// Arguments to `populate_mock`.
///
/// Exactly one concrete catalog snapshot must be resolvable from a request:
/// a direct catalog handle, the full set of scalar identifying fields, or —
/// once the model is bound — nothing at all (the bound catalog is reused).
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulateRequest<'a> {
    pub halocat: Option<&'a HaloCatalog>,
    pub simname: Option<&'a str>,
    pub redshift: Option<f64>,
    pub halo_finder: Option<&'a str>,
    pub version_name: Option<&'a str>,
    /// Per-call completeness-cut override, in particle-mass units.
    pub num_ptcl_requirement: Option<f64>,
    /// Seed for the stochastic draw; unseeded requests draw from OS entropy.
    pub seed: Option<u64>,
}

impl<'a> PopulateRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalog(halocat: &'a HaloCatalog) -> Self {
        Self {
            halocat: Some(halocat),
            ..Self::default()
        }
    }

    pub fn with_simname(mut self, simname: &'a str) -> Self {
        self.simname = Some(simname);
        self
    }

    pub fn with_redshift(mut self, redshift: f64) -> Self {
        self.redshift = Some(redshift);
        self
    }

    pub fn with_halo_finder(mut self, halo_finder: &'a str) -> Self {
        self.halo_finder = Some(halo_finder);
        self
    }

    pub fn with_version_name(mut self, version_name: &'a str) -> Self {
        self.version_name = Some(version_name);
        self
    }

    pub fn with_num_ptcl_requirement(mut self, requirement: f64) -> Self {
        self.num_ptcl_requirement = Some(requirement);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the first identifying field present in the request that
    /// disagrees with `identity`.
    fn first_disagreement(&self, identity: &CatalogIdentity) -> Option<IdentityField> {
        if self.simname.is_some_and(|s| s != identity.simname) {
            Some(IdentityField::Simname)
        } else if self.redshift.is_some_and(|z| z != identity.redshift) {
            Some(IdentityField::Redshift)
        } else if self.halo_finder.is_some_and(|hf| hf != identity.halo_finder) {
            Some(IdentityField::HaloFinder)
        } else if self.version_name.is_some_and(|v| v != identity.version_name) {
            Some(IdentityField::VersionName)
        } else {
            None
        }
    }
}

impl CompositeModel {
    /// Populates (or repopulates) the mock galaxy table.
    ///
    /// The first successful call binds the model to the resolved catalog's
    /// identity. Subsequent calls check every identifying field present in
    /// the request against the bound context and fail on the first mismatch,
    /// with no reload and no mutation of the existing mock; a clean call
    /// replaces the galaxy table wholesale with a fresh stochastic draw.
    pub fn populate_mock(
        &mut self,
        request: &PopulateRequest<'_>,
        provider: &dyn CatalogProvider,
    ) -> Result<(), ConfigurationError> {
        // A catalog handle and scalar fields given together must agree.
        if let Some(catalog) = request.halocat {
            if let Some(field) = request.first_disagreement(catalog.identity()) {
                return Err(ConfigurationError::CatalogDisagreement { field });
            }
        }

        // Consistency guard: rebinding checks run before any load or draw.
        if let MockState::Bound(context) = &self.state {
            if let Some(field) = request.first_disagreement(&context.identity) {
                return Err(ConfigurationError::BindingMismatch { field });
            }
            if let Some(catalog) = request.halocat {
                if let Some(field) = context.identity.first_mismatch(catalog.identity()) {
                    return Err(ConfigurationError::BindingMismatch { field });
                }
            }
        }

        let requirement = request
            .num_ptcl_requirement
            .unwrap_or(self.options.num_ptcl_requirement);

        let catalog = match request.halocat {
            Some(catalog) => {
                catalog.validate()?;
                catalog.clone()
            }
            None => match std::mem::replace(&mut self.state, MockState::Unbound) {
                // Same snapshot: reuse the bound catalog without reloading.
                MockState::Bound(context) => context.catalog,
                MockState::Unbound => {
                    let (Some(simname), Some(redshift), Some(halo_finder), Some(version_name)) = (
                        request.simname,
                        request.redshift,
                        request.halo_finder,
                        request.version_name,
                    ) else {
                        return Err(ConfigurationError::NoCatalog);
                    };
                    let catalog = provider.load(simname, redshift, halo_finder, version_name)?;
                    catalog.validate()?;
                    catalog
                }
            },
        };

        let mut rng = match request.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_os_rng(),
        };
        let (halos, galaxies) = self.populate_table(&catalog, requirement, &mut rng);

        self.state = MockState::Bound(MockContext {
            identity: catalog.identity().clone(),
            particle_mass: catalog.particle_mass(),
            num_ptcl_requirement: requirement,
            catalog,
            halos,
            galaxies,
        });
        Ok(())
    }

    /// Runs the population algorithm: completeness cut, then per
    /// subpopulation (in fixed order) occupation draws, per-halo
    /// replication, and phase-space offsets.
    fn populate_table(
        &self,
        catalog: &HaloCatalog,
        requirement: f64,
        rng: &mut ChaChaRng,
    ) -> (Vec<Halo>, GalaxyTable) {
        // Strict inequality: a requirement of zero disables the cut.
        let mass_bound = catalog.particle_mass() * requirement;
        let halos: Vec<Halo> = catalog
            .halos()
            .iter()
            .filter(|h| h.mvir > mass_bound)
            .cloned()
            .collect();

        let mut galaxies = Vec::new();
        for (gal_type, subpopulation) in &self.subpopulations {
            let counts = subpopulation.occupation.mc_occupation(&halos, rng);
            for (halo, &count) in halos.iter().zip(&counts) {
                if count == 0 {
                    continue;
                }
                for point in subpopulation
                    .profile
                    .mc_pos_vel(halo, count as usize, rng)
                {
                    galaxies.push(Galaxy {
                        gal_type: gal_type.clone(),
                        halo_id: halo.halo_id,
                        halo_mvir: halo.mvir,
                        position: halo.position + point.position,
                        velocity: halo.velocity + point.velocity,
                    });
                }
            }
        }

        (halos, GalaxyTable::new(galaxies))
    }
}
