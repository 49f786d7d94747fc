//! Deterministic synthetic halo catalogs for tests and demos.

use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::catalog::{CatalogError, CatalogIdentity, CatalogProvider, HaloCatalog};
use crate::halo::Halo;

/// Bolshoi-like particle mass (Msun/h).
const FAKE_PARTICLE_MASS: f64 = 1.35e8;

/// Comoving box side length (Mpc/h).
const FAKE_LBOX: f64 = 250.0;

/// Halo mass range (Msun/h), log-uniform. The floor sits well below the
/// conventional 300-particle completeness bound so that the default cut is
/// non-trivial on a fake catalog.
const MIN_MASS: f64 = 1.0e10;
const MAX_MASS: f64 = 1.0e15;

fn fake_identity() -> CatalogIdentity {
    CatalogIdentity::new("fake", 0.0, "rockstar", "alpha_version0")
}

impl HaloCatalog {
    /// Generates a synthetic catalog of `num_halos` host halos.
    ///
    /// The same seed always produces the same catalog. Masses are drawn
    /// log-uniformly, structural properties follow rough concentration-mass
    /// and virial scaling relations, positions are uniform in the box.
    pub fn fake(seed: u64, num_halos: usize) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut halos = Vec::with_capacity(num_halos);

        let log_min = MIN_MASS.ln();
        let log_max = MAX_MASS.ln();

        for i in 0..num_halos {
            let mvir = (log_min + rng.random::<f64>() * (log_max - log_min)).exp();

            // Virial radius from mvir^(1/3) scaling, normalized so a
            // 1e12 Msun/h halo has rvir = 0.2 Mpc/h.
            let rvir = 0.2 * (mvir / 1.0e12).powf(1.0 / 3.0);

            // Concentration-mass relation with ~20% log scatter
            let median_conc = 9.0 * (mvir / 1.0e13).powf(-0.1);
            let conc = (median_conc * (1.0 + 0.2 * sample_unit_gaussian(&mut rng))).clamp(2.0, 25.0);

            let mut halo = Halo {
                halo_id: i as u64,
                upid: -1,
                mvir,
                rvir,
                conc,
                vmax: 0.0,
                position: Point3::new(
                    rng.random::<f64>() * FAKE_LBOX,
                    rng.random::<f64>() * FAKE_LBOX,
                    rng.random::<f64>() * FAKE_LBOX,
                ),
                velocity: Vector3::new(
                    200.0 * sample_unit_gaussian(&mut rng),
                    200.0 * sample_unit_gaussian(&mut rng),
                    200.0 * sample_unit_gaussian(&mut rng),
                ),
            };
            halo.vmax = 1.1 * halo.vvir();
            halos.push(halo);
        }

        HaloCatalog::new(fake_identity(), FAKE_PARTICLE_MASS, FAKE_LBOX, halos)
    }

    /// Fake catalog at a non-default redshift, for binding-mismatch tests.
    pub fn fake_at_redshift(seed: u64, num_halos: usize, redshift: f64) -> Self {
        let base = Self::fake(seed, num_halos);
        let identity = CatalogIdentity {
            redshift,
            ..base.identity().clone()
        };
        HaloCatalog::new(
            identity,
            base.particle_mass(),
            base.lbox(),
            base.halos().to_vec(),
        )
    }
}

/// One standard normal draw, for structural scatter and velocities.
fn sample_unit_gaussian(rng: &mut ChaChaRng) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Provider serving the synthetic `fake` catalog.
#[derive(Debug, Clone)]
pub struct FakeProvider {
    pub seed: u64,
    pub num_halos: usize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            seed: 43,
            num_halos: 1000,
        }
    }
}

impl CatalogProvider for FakeProvider {
    fn load(
        &self,
        simname: &str,
        redshift: f64,
        halo_finder: &str,
        version_name: &str,
    ) -> Result<HaloCatalog, CatalogError> {
        let requested = CatalogIdentity::new(simname, redshift, halo_finder, version_name);
        if requested == fake_identity() {
            Ok(HaloCatalog::fake(self.seed, self.num_halos))
        } else {
            Err(CatalogError::NotFound {
                simname: simname.to_string(),
                redshift,
                halo_finder: halo_finder.to_string(),
                version_name: version_name.to_string(),
            })
        }
    }
}
