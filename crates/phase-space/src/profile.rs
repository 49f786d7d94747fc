//! The phase-space capability contract.

use halo_catalog::Halo;
use nalgebra::Vector3;
use rand_chacha::ChaChaRng;

/// A position/velocity offset relative to the host halo center.
///
/// Positions are in Mpc/h, velocities in km/s, matching the halo catalog
/// conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpacePoint {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl PhaseSpacePoint {
    pub fn zero() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
        }
    }
}

/// Intra-halo phase-space distribution for one galaxy subpopulation.
pub trait PhaseSpaceComponent {
    /// The subpopulation this component models, e.g. `"satellites"`.
    fn gal_type(&self) -> &str;

    /// Draws `count` position/velocity offsets for galaxies hosted by
    /// `host`. Offsets are relative to the halo center.
    fn mc_pos_vel(&self, host: &Halo, count: usize, rng: &mut ChaChaRng) -> Vec<PhaseSpacePoint>;
}
