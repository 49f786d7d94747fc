//! Galaxy phase-space profile components.
//!
//! A phase-space component draws per-galaxy position and velocity offsets
//! relative to the host halo center. Centrals use the degenerate
//! `TrivialProfile` (zero offset); satellites use the `NfwProfile`.

pub mod nfw;
pub mod profile;
pub mod trivial;

#[cfg(test)]
mod trivial_test;

pub use nfw::NfwProfile;
pub use profile::{PhaseSpaceComponent, PhaseSpacePoint};
pub use trivial::TrivialProfile;
