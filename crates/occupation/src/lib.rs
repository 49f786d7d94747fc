//! Halo occupation statistics components.
//!
//! An occupation component models how many galaxies of one subpopulation a
//! halo hosts: its first moment (`mean_occupation`) and stochastic integer
//! draws (`mc_occupation`). The Zheng et al. (2007) centrals and satellites
//! components are provided; anything satisfying `OccupationComponent` can be
//! composed into a model.

pub mod component;
pub mod sampling;
pub mod zheng07;


pub use component::{OccupationComponent, ParamSet};
pub use zheng07::{Zheng07Centrals, Zheng07Satellites};
