//! NFW satellite phase-space sampling.

use std::f64::consts::PI;

use halo_catalog::Halo;
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::profile::{PhaseSpaceComponent, PhaseSpacePoint};

/// Bisection iterations for inverting the cumulative mass profile.
/// 40 halvings of (0, c] resolve the scaled radius to ~1e-12.
const BISECTION_ITERATIONS: u32 = 40;

/// Unbiased NFW phase-space profile.
///
/// Radii are drawn by inverse-transform sampling on the NFW cumulative mass
/// profile, directions are isotropic, and velocity offsets are isotropic
/// gaussians with dispersion vvir / sqrt(2).
#[derive(Debug, Clone)]
pub struct NfwProfile {
    gal_type: String,
}

impl NfwProfile {
    pub fn new(gal_type: impl Into<String>) -> Self {
        Self {
            gal_type: gal_type.into(),
        }
    }

    /// Samples a halo-centric radius in Mpc/h, in (0, rvir].
    fn sample_radius(&self, host: &Halo, rng: &mut ChaChaRng) -> f64 {
        let c = host.conc;
        let u: f64 = rng.random();
        let target = u * nfw_cumulative_mass(c);

        // Invert m(x) = target by bisection on (0, c]
        let mut lo = 0.0;
        let mut hi = c;
        for _ in 0..BISECTION_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            if nfw_cumulative_mass(mid) < target {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let x = 0.5 * (lo + hi);

        host.rvir * x / c
    }
}

/// Dimensionless NFW enclosed mass, m(x) = ln(1 + x) - x / (1 + x),
/// with x = r / r_s.
fn nfw_cumulative_mass(x: f64) -> f64 {
    (1.0 + x).ln() - x / (1.0 + x)
}

/// A uniformly-distributed direction on the unit sphere.
fn sample_unit_vector(rng: &mut ChaChaRng) -> Vector3<f64> {
    let cos_theta: f64 = rng.random_range(-1.0..1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let phi: f64 = rng.random_range(0.0..2.0 * PI);
    Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// A zero-mean gaussian draw with the given dispersion.
fn sample_velocity_component(rng: &mut ChaChaRng, sigma: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

impl PhaseSpaceComponent for NfwProfile {
    fn gal_type(&self) -> &str {
        &self.gal_type
    }

    fn mc_pos_vel(&self, host: &Halo, count: usize, rng: &mut ChaChaRng) -> Vec<PhaseSpacePoint> {
        let sigma = host.vvir() / 2.0_f64.sqrt();

        (0..count)
            .map(|_| {
                let radius = self.sample_radius(host, rng);
                let direction = sample_unit_vector(rng);
                let velocity = Vector3::new(
                    sample_velocity_component(rng, sigma),
                    sample_velocity_component(rng, sigma),
                    sample_velocity_component(rng, sigma),
                );
                PhaseSpacePoint {
                    position: direction * radius,
                    velocity,
                }
            })
            .collect()
    }
}
