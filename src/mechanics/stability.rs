//! Stable states, bistability phase, and the energy barrier.
//!
//! Setting the twist derivative of the strain energy to zero reduces to a
//! single sine equation; its two roots give the candidate stable states in
//! closed form. The discriminant
//!
//! ```text
//! lambda = ((b - 2 c cos(beta)) / a) sin(pi / n)
//! ```
//!
//! gates everything: `|lambda| <= 1` yields two states, anything else none.
//! This is the state-classification core the rest of the system is built on.
//!
//! Reference: Zhai et al., PNAS 2018.

use serde::Serialize;

use crate::geometry::{FoldState, KreslingUnit};

/// The up-to-two stable fold states of a unit.
///
/// Derived deterministically from the geometric parameters and cached per
/// instance; geometry setters clear the cache.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StableStates {
    /// Low-twist stable state, absent when `|lambda| > 1`
    pub state1: Option<FoldState>,
    /// High-twist stable state, absent when `|lambda| > 1`
    pub state2: Option<FoldState>,
}

impl StableStates {
    /// True iff both states are present.
    pub fn is_bistable(&self) -> bool {
        self.state1.is_some() && self.state2.is_some()
    }
}

/// Bistability classification of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// No stable-state pair reachable by the closed form
    Monostable,
    /// Two stable states separated by an (ideally) zero-energy path
    BistableZeroEnergy,
    /// Two stable states separated by a strained barrier configuration
    BistableNonzeroEnergy,
}

impl Phase {
    /// The phase label, exactly as downstream displays expect it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Monostable => "monostable",
            Phase::BistableZeroEnergy => "bistable-zero-energy",
            Phase::BistableNonzeroEnergy => "bistable-nonzero-energy",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KreslingUnit {
    /// The sine-equation discriminant `lambda`.
    pub fn lambda(&self) -> f64 {
        let half_sector = std::f64::consts::PI / self.n() as f64;
        ((self.b() - 2.0 * self.c() * self.beta().cos()) / self.a()) * half_sector.sin()
    }

    /// Closed-form stable states, cached until the geometry changes.
    ///
    /// For `|lambda| <= 1`:
    ///
    /// ```text
    /// phi1 = asin(lambda) - pi/n        phi2 = pi - asin(lambda) - pi/n
    /// h_k  = sqrt(max(0, c^2 - r^2 - R^2 + 2 r R cos(phi_k)))
    /// ```
    ///
    /// Otherwise both states are absent. Heights are clamped at zero, so a
    /// root whose radicand dips slightly negative reports `h = 0` rather
    /// than NaN.
    pub fn stable_states(&self) -> StableStates {
        if let Some(cached) = self.stable_cache.get() {
            return cached;
        }

        let states = self.solve_stable_states();
        self.stable_cache.set(Some(states));
        states
    }

    fn solve_stable_states(&self) -> StableStates {
        let lambda = self.lambda();
        if lambda.abs() > 1.0 {
            return StableStates::default();
        }

        let half_sector = std::f64::consts::PI / self.n() as f64;
        let phi1 = lambda.asin() - half_sector;
        let phi2 = std::f64::consts::PI - lambda.asin() - half_sector;

        StableStates {
            state1: Some(FoldState::new(self.rest_height(phi1), phi1)),
            state2: Some(FoldState::new(self.rest_height(phi2), phi2)),
        }
    }

    /// Height at which the mountain crease is unstrained for twist `phi`.
    fn rest_height(&self, phi: f64) -> f64 {
        (self.c() * self.c() - self.r() * self.r() - self.R() * self.R()
            + 2.0 * self.r() * self.R() * phi.cos())
        .max(0.0)
        .sqrt()
    }

    /// True iff the unit has two stable states.
    pub fn is_bistable(&self) -> bool {
        self.stable_states().is_bistable()
    }

    /// Classify the bistability phase.
    pub fn phase(&self) -> Phase {
        let states = self.stable_states();
        let (Some(state1), Some(state2)) = (states.state1, states.state2) else {
            return Phase::Monostable;
        };

        let phi0 = std::f64::consts::PI / 2.0 - std::f64::consts::PI / self.n() as f64;
        // Crease length at which the saddle configuration reaches the base
        // plane; longer mountain creases clear it without strain.
        let fold_span = (self.r() * self.r() + self.R() * self.R()
            + 2.0 * self.r() * self.R() * self.sector_angle().cos())
        .sqrt();

        if self.c() > fold_span {
            Phase::BistableZeroEnergy
        } else if state1.phi <= phi0 && phi0 <= state2.phi {
            Phase::BistableZeroEnergy
        } else {
            Phase::BistableNonzeroEnergy
        }
    }

    /// Approximate saddle-point energy between the two stable states.
    ///
    /// Evaluates the energy at the fixed analytic angle
    /// `phi0 = pi/2 - pi/n` with a geometric height estimate, not at a true
    /// saddle found along the minimum-energy path. Downstream barrier
    /// displays depend on this exact approximation; returns 0 for a
    /// perfectly balanced bistable unit.
    pub fn energy_barrier(&self) -> f64 {
        let half_sector = std::f64::consts::PI / self.n() as f64;
        let phi0 = std::f64::consts::PI / 2.0 - half_sector;
        let h0 = (self.c() * self.c() - self.r() * self.r() - self.R() * self.R()
            + 2.0 * self.r() * self.R() * half_sector.sin())
        .max(0.0)
        .sqrt();

        self.energy(h0, phi0)
    }
}
