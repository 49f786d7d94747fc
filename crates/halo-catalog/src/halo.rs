//! Halo records.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Newton's constant in Mpc (km/s)^2 / Msun.
const G_NEWTON: f64 = 4.302e-9;

/// A single dark-matter halo record.
///
/// Units follow rockstar-style halo finder conventions: masses in Msun/h,
/// lengths in Mpc/h, velocities in km/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Halo {
    pub halo_id: u64,

    /// Parent halo id, or -1 for host halos.
    pub upid: i64,

    /// Virial mass (Msun/h).
    pub mvir: f64,

    /// Virial radius (Mpc/h).
    pub rvir: f64,

    /// NFW concentration, c = rvir / r_s.
    pub conc: f64,

    /// Maximum circular velocity (km/s).
    pub vmax: f64,

    /// Comoving position within the simulation box (Mpc/h).
    pub position: Point3<f64>,

    /// Peculiar velocity (km/s).
    pub velocity: Vector3<f64>,
}

impl Halo {
    pub fn is_host(&self) -> bool {
        self.upid < 0
    }

    /// Virial velocity sqrt(G mvir / rvir) in km/s.
    pub fn vvir(&self) -> f64 {
        (G_NEWTON * self.mvir / self.rvir).sqrt()
    }
}
