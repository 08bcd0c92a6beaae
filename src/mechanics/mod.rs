//! Energy and stability analysis of the Kresling unit.
//!
//! This module implements:
//! - linear-spring strain energy over all mountain and valley creases
//! - brute-force equilibrium twist search and landscape sampling
//! - closed-form stable-state solution, phase classification, and the
//!   energy-barrier approximation

mod energy;
mod stability;

pub use energy::{EnergyLandscape, LandscapePoint};
pub use stability::{Phase, StableStates};
