//! Zheng et al. (2007) occupation components, arXiv:0703457.
//!
//! Centrals follow a nearest-integer distribution whose first moment is an
//! erf function of log halo mass; satellites follow a Poisson distribution
//! whose first moment is a power law truncated at the low-mass end.

use halo_catalog::Halo;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::component::{OccupationComponent, ParamSet};
use crate::sampling::{erf, sample_poisson};

/// Best-fit parameters from Table 1 of arXiv:0703457, one row per
/// luminosity threshold: (threshold, log_mmin, sigma_logm, log_m0,
/// log_m1, alpha).
const PUBLISHED_PARAMS: [(f64, f64, f64, f64, f64, f64); 9] = [
    (-22.0, 14.22, 0.77, 14.00, 14.69, 0.87),
    (-21.5, 13.38, 0.51, 13.94, 13.91, 1.04),
    (-21.0, 12.79, 0.39, 11.92, 13.94, 1.15),
    (-20.5, 12.30, 0.21, 11.84, 13.58, 1.12),
    (-20.0, 12.02, 0.26, 11.38, 13.31, 1.06),
    (-19.5, 11.75, 0.28, 11.69, 13.01, 1.06),
    (-19.0, 11.60, 0.26, 11.49, 12.83, 1.02),
    (-18.5, 11.46, 0.24, 10.59, 12.68, 0.97),
    (-18.0, 11.35, 0.25, 11.20, 12.40, 0.83),
];

/// Returns the published row nearest to `threshold`.
///
/// Any finite threshold builds a model; thresholds between published rows
/// adopt the nearest row's best-fit values.
fn nearest_published_row(threshold: f64) -> (f64, f64, f64, f64, f64, f64) {
    let mut best = PUBLISHED_PARAMS[0];
    for row in PUBLISHED_PARAMS {
        if (row.0 - threshold).abs() < (best.0 - threshold).abs() {
            best = row;
        }
    }
    best
}

/// Central galaxy occupation: `<Ncen> = 1/2 [1 + erf((logM - logMmin) / sigma)]`.
///
/// The stochastic draw is the nearest-integer distribution, so per-halo
/// counts are always 0 or 1.
#[derive(Debug, Clone)]
pub struct Zheng07Centrals {
    log_mmin: f64,
    sigma_logm: f64,
    params: ParamSet,
}

impl Zheng07Centrals {
    pub const GAL_TYPE: &'static str = "centrals";

    pub fn new(threshold: f64) -> Self {
        let (_, log_mmin, sigma_logm, _, _, _) = nearest_published_row(threshold);
        Self::with_params(log_mmin, sigma_logm)
    }

    pub fn with_params(log_mmin: f64, sigma_logm: f64) -> Self {
        let mut params = ParamSet::new();
        params.insert_scoped(Self::GAL_TYPE, "log_mmin", log_mmin);
        params.insert_scoped(Self::GAL_TYPE, "sigma_logm", sigma_logm);
        Self {
            log_mmin,
            sigma_logm,
            params,
        }
    }

    fn mean_for_mass(&self, mvir: f64) -> f64 {
        0.5 * (1.0 + erf((mvir.log10() - self.log_mmin) / self.sigma_logm))
    }
}

impl OccupationComponent for Zheng07Centrals {
    fn gal_type(&self) -> &str {
        Self::GAL_TYPE
    }

    fn mean_occupation(&self, halos: &[Halo]) -> Vec<f64> {
        halos.iter().map(|h| self.mean_for_mass(h.mvir)).collect()
    }

    fn mc_occupation(&self, halos: &[Halo], rng: &mut ChaChaRng) -> Vec<u32> {
        halos
            .iter()
            .map(|h| (rng.random::<f64>() < self.mean_for_mass(h.mvir)) as u32)
            .collect()
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }
}

/// Satellite galaxy occupation: `<Nsat> = ((M - M0) / M1)^alpha` for
/// `M > M0`, zero otherwise.
///
/// The stochastic draw is Poisson with the above first moment.
#[derive(Debug, Clone)]
pub struct Zheng07Satellites {
    m0: f64,
    m1: f64,
    alpha: f64,
    params: ParamSet,
}

impl Zheng07Satellites {
    pub const GAL_TYPE: &'static str = "satellites";

    pub fn new(threshold: f64) -> Self {
        let (_, _, _, log_m0, log_m1, alpha) = nearest_published_row(threshold);
        Self::with_params(log_m0, log_m1, alpha)
    }

    pub fn with_params(log_m0: f64, log_m1: f64, alpha: f64) -> Self {
        let mut params = ParamSet::new();
        params.insert_scoped(Self::GAL_TYPE, "log_m0", log_m0);
        params.insert_scoped(Self::GAL_TYPE, "log_m1", log_m1);
        params.insert_scoped(Self::GAL_TYPE, "alpha", alpha);
        Self {
            m0: 10.0_f64.powf(log_m0),
            m1: 10.0_f64.powf(log_m1),
            alpha,
            params,
        }
    }

    fn mean_for_mass(&self, mvir: f64) -> f64 {
        if mvir > self.m0 {
            ((mvir - self.m0) / self.m1).powf(self.alpha)
        } else {
            0.0
        }
    }
}

impl OccupationComponent for Zheng07Satellites {
    fn gal_type(&self) -> &str {
        Self::GAL_TYPE
    }

    fn mean_occupation(&self, halos: &[Halo]) -> Vec<f64> {
        halos.iter().map(|h| self.mean_for_mass(h.mvir)).collect()
    }

    fn mc_occupation(&self, halos: &[Halo], rng: &mut ChaChaRng) -> Vec<u32> {
        halos
            .iter()
            .map(|h| sample_poisson(rng, self.mean_for_mass(h.mvir)))
            .collect()
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }
}
