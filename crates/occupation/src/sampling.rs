//! Shared sampling primitives for occupation statistics.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Above this mean the Poisson draw switches to a rounded gaussian; the
/// product form underflows and Knuth's loop is O(mean).
const POISSON_GAUSSIAN_CROSSOVER: f64 = 30.0;

/// Gaussian draw via the Box-Muller transform
///
/// Returns one sample from N(mean, std_dev²).
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Power-law draw on [x_min, x_max] by inverse transform sampling
///
/// Samples p(x) ∝ x^alpha. The closed-form inverse used here excludes
/// alpha = -1 (the log-uniform case).
pub fn sample_power_law(rng: &mut ChaChaRng, x_min: f64, x_max: f64, alpha: f64) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample a non-negative integer from a Poisson distribution
///
/// Uses Knuth's product method for small means and a rounded gaussian
/// approximation beyond the crossover. A non-positive mean yields 0.
pub fn sample_poisson(rng: &mut ChaChaRng, mean: f64) -> u32 {
    if mean <= 0.0 {
        return 0;
    }
    if mean > POISSON_GAUSSIAN_CROSSOVER {
        let draw = sample_gaussian(rng, mean, mean.sqrt()).round();
        return draw.max(0.0) as u32;
    }

    let limit = (-mean).exp();
    let mut count = 0u32;
    let mut product: f64 = rng.random();
    while product > limit {
        count += 1;
        product *= rng.random::<f64>();
    }
    count
}

/// Error function approximation
///
/// Abramowitz & Stegun 7.1.26, maximum absolute error 1.5e-7, extended to
/// negative arguments by antisymmetry.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-x * x).exp())
}
