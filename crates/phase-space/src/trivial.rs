//! The degenerate halo-center profile.

use halo_catalog::Halo;
use rand_chacha::ChaChaRng;

use crate::profile::{PhaseSpaceComponent, PhaseSpacePoint};

/// Places every galaxy exactly at the host halo center with the host's
/// velocity. This is the conventional centrals profile.
#[derive(Debug, Clone)]
pub struct TrivialProfile {
    gal_type: String,
}

impl TrivialProfile {
    pub fn new(gal_type: impl Into<String>) -> Self {
        Self {
            gal_type: gal_type.into(),
        }
    }
}

impl PhaseSpaceComponent for TrivialProfile {
    fn gal_type(&self) -> &str {
        &self.gal_type
    }

    fn mc_pos_vel(&self, _host: &Halo, count: usize, _rng: &mut ChaChaRng) -> Vec<PhaseSpacePoint> {
        vec![PhaseSpacePoint::zero(); count]
    }
}
