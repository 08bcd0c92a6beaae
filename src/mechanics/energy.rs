//! Strain energy of the creased shell and its landscape over height.
//!
//! Every crease is modeled as a linear spring at its rest length, so the
//! energy at fold state `(h, phi)` sums `n` mountain and `n` valley terms:
//!
//! ```text
//! E = n km (c~ - c)^2 / 2 + n kv (d~ - d)^2 / 2
//! ```
//!
//! Reference: Zhai et al., PNAS 2018 (truss model of Kresling bistability).

use crate::geometry::{CreaseLengths, KreslingUnit};

/// Number of intervals in the twist-angle grid search (101 samples).
///
/// Deliberately coarse: the resolution (range/100) is part of the observed
/// behavior downstream displays were built against. Do not swap in a
/// higher-precision minimizer without revisiting those consumers.
const TWIST_GRID_STEPS: usize = 100;

/// One sample of the energy landscape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandscapePoint {
    /// Sampled height
    pub h: f64,
    /// Equilibrium twist angle found at that height
    pub phi: f64,
    /// Strain energy at `(h, phi)`
    pub energy: f64,
}

/// Lazy, restartable sampling of the energy landscape over a height range.
///
/// Yields `steps + 1` equally spaced heights; each sample carries the
/// grid-searched equilibrium twist angle and the energy there.
#[derive(Debug, Clone)]
pub struct EnergyLandscape<'a> {
    unit: &'a KreslingUnit,
    h_min: f64,
    h_max: f64,
    steps: usize,
    next: usize,
}

impl Iterator for EnergyLandscape<'_> {
    type Item = LandscapePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }

        let t = if self.steps == 0 {
            0.0
        } else {
            self.next as f64 / self.steps as f64
        };
        let h = self.h_min + t * (self.h_max - self.h_min);
        self.next += 1;

        let phi = self.unit.equilibrium_twist_angle(h);
        Some(LandscapePoint {
            h,
            phi,
            energy: self.unit.energy(h, phi),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EnergyLandscape<'_> {}

impl KreslingUnit {
    /// Linear-spring strain energy at fold state `(h, phi)`.
    ///
    /// Pure function; always reads the live `km`/`kv`, so stiffness changes
    /// take effect immediately.
    pub fn energy(&self, h: f64, phi: f64) -> f64 {
        let CreaseLengths { c_tilde, d_tilde } = self.crease_lengths(h, phi);
        let n = self.n() as f64;

        let mountain_strain = c_tilde - self.c();
        let valley_strain = d_tilde - self.d();

        n * self.km() * mountain_strain * mountain_strain / 2.0
            + n * self.kv() * valley_strain * valley_strain / 2.0
    }

    /// Twist angle minimizing the energy at fixed height `h`.
    ///
    /// Brute-force grid search over `phi in [0, min(pi, pi - 2 pi / n)]`
    /// with 101 samples; first sample wins ties (strict `<`).
    pub fn equilibrium_twist_angle(&self, h: f64) -> f64 {
        let phi_max = std::f64::consts::PI.min(std::f64::consts::PI - self.sector_angle());

        let mut best_phi = 0.0;
        let mut best_energy = f64::INFINITY;

        for i in 0..=TWIST_GRID_STEPS {
            let phi = phi_max * i as f64 / TWIST_GRID_STEPS as f64;
            let energy = self.energy(h, phi);
            if energy < best_energy {
                best_energy = energy;
                best_phi = phi;
            }
        }

        best_phi
    }

    /// Sample the energy landscape over `steps + 1` equally spaced heights
    /// in `[h_min, h_max]`.
    ///
    /// Display-oriented: nothing in the model decides based on these samples.
    pub fn energy_landscape(&self, h_min: f64, h_max: f64, steps: usize) -> EnergyLandscape<'_> {
        EnergyLandscape {
            unit: self,
            h_min,
            h_max,
            steps,
            next: 0,
        }
    }
}
