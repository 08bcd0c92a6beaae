//! The conical Kresling unit and its derived geometry.
//!
//! A unit is described by five geometric inputs and one stiffness input:
//! cell count `n`, top edge `a`, bottom edge `b`, mountain-crease length `c`,
//! crease angle `beta`, and axial stiffness `EA`. From these it derives:
//!
//! - valley-crease rest length `d` (law of cosines on b, c, beta)
//! - top circumradius `r = a / (2 sin(pi/n))`
//! - bottom circumradius `R = b / (2 sin(pi/n))`
//! - per-crease stiffnesses `km = EA/c`, `kv = EA/d`
//!
//! Reference: Kresling B. "Natural twist buckling in shells." 2008;
//! Zhai et al., PNAS 2018 (origami multistability).

use std::cell::Cell;

use thiserror::Error;

use crate::config::UnitParameters;
use crate::mechanics::StableStates;

/// One configuration of the deployable unit: the height between the top and
/// bottom polygons and the twist angle between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldState {
    /// Height between the top and bottom polygons
    pub h: f64,
    /// Twist angle between the top and bottom polygons (radians)
    pub phi: f64,
}

impl FoldState {
    pub fn new(h: f64, phi: f64) -> Self {
        Self { h, phi }
    }
}

/// Strained lengths of the mountain and valley creases at a fold state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreaseLengths {
    /// Current mountain-crease length (rest length `c`)
    pub c_tilde: f64,
    /// Current valley-crease length (rest length `d`)
    pub d_tilde: f64,
}

/// Rejected unit parameters.
///
/// The reference model accepts degenerate inputs and lets NaN propagate;
/// this implementation fails fast at construction instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    /// The polygon needs at least 3 cells.
    #[error("cell count {0} is too small: a Kresling polygon needs n >= 3")]
    CellCountTooSmall(u32),

    /// A length or stiffness input must be strictly positive and finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive {
        /// Which input was rejected (a, b, c, or EA).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The crease angle must lie strictly inside (0, pi).
    #[error("beta must lie in (0, pi), got {0}")]
    BetaOutOfRange(f64),
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}

/// The Kresling unit mechanical model.
///
/// Owns a validated parameter set plus the derived quantities; the
/// stable-state pair is cached per instance and cleared by every setter
/// that changes the geometry. `EA` changes only rescale stiffness, so they
/// leave the (purely geometric) cache alone.
///
/// The cache uses `Cell`, which keeps the struct `!Sync`: sharing a unit
/// across threads requires one instance per thread, matching the model's
/// single-owner contract.
#[derive(Debug, Clone)]
pub struct KreslingUnit {
    pub(crate) n: u32,
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
    pub(crate) beta: f64,
    pub(crate) ea: f64,

    // Derived; kept in sync by rederive()
    pub(crate) d: f64,
    pub(crate) r: f64,
    pub(crate) R: f64,
    pub(crate) km: f64,
    pub(crate) kv: f64,

    pub(crate) stable_cache: Cell<Option<StableStates>>,
}

impl KreslingUnit {
    /// Build a unit from validated parameters.
    pub fn new(params: &UnitParameters) -> Result<Self, ParameterError> {
        if params.n < 3 {
            return Err(ParameterError::CellCountTooSmall(params.n));
        }
        check_positive("a", params.a)?;
        check_positive("b", params.b)?;
        check_positive("c", params.c)?;
        check_positive("EA", params.ea)?;
        if !(params.beta > 0.0 && params.beta < std::f64::consts::PI) {
            return Err(ParameterError::BetaOutOfRange(params.beta));
        }

        Ok(Self::from_validated(*params))
    }

    fn from_validated(params: UnitParameters) -> Self {
        let mut unit = Self {
            n: params.n,
            a: params.a,
            b: params.b,
            c: params.c,
            beta: params.beta,
            ea: params.ea,
            d: 0.0,
            r: 0.0,
            R: 0.0,
            km: 0.0,
            kv: 0.0,
            stable_cache: Cell::new(None),
        };
        unit.rederive();
        unit
    }

    /// Recompute all derived quantities from the current inputs.
    fn rederive(&mut self) {
        let half_sector = std::f64::consts::PI / self.n as f64;

        // Valley rest length: law of cosines on (b, c, beta).
        // The radicand is >= (b - c)^2; max(0) only absorbs rounding.
        self.d = (self.b * self.b + self.c * self.c
            - 2.0 * self.b * self.c * self.beta.cos())
        .max(0.0)
        .sqrt();

        self.r = self.a / (2.0 * half_sector.sin());
        self.R = self.b / (2.0 * half_sector.sin());
        self.km = self.ea / self.c;
        self.kv = self.ea / self.d;
    }

    pub(crate) fn invalidate_cache(&self) {
        self.stable_cache.set(None);
    }

    /// Angular span of one cell, `2 pi / n`.
    pub fn sector_angle(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.n as f64
    }

    /// Current parameters as a plain struct.
    pub fn parameters(&self) -> UnitParameters {
        UnitParameters {
            n: self.n,
            a: self.a,
            b: self.b,
            c: self.c,
            beta: self.beta,
            ea: self.ea,
        }
    }

    /// Number of unit cells around the polygon.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Top-polygon edge length.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Bottom-polygon edge length.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Mountain-crease rest length.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Crease angle (radians).
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Axial stiffness coefficient.
    pub fn ea(&self) -> f64 {
        self.ea
    }

    /// Valley-crease rest length.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Top-polygon circumradius.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Bottom-polygon circumradius.
    pub fn R(&self) -> f64 {
        self.R
    }

    /// Mountain-crease stiffness `EA/c`.
    pub fn km(&self) -> f64 {
        self.km
    }

    /// Valley-crease stiffness `EA/d`.
    pub fn kv(&self) -> f64 {
        self.kv
    }

    /// Set the cell count; re-derives geometry and clears the cache.
    pub fn set_n(&mut self, n: u32) -> Result<(), ParameterError> {
        if n < 3 {
            return Err(ParameterError::CellCountTooSmall(n));
        }
        self.n = n;
        self.rederive();
        self.invalidate_cache();
        Ok(())
    }

    /// Set the top edge length; re-derives geometry and clears the cache.
    pub fn set_a(&mut self, a: f64) -> Result<(), ParameterError> {
        check_positive("a", a)?;
        self.a = a;
        self.rederive();
        self.invalidate_cache();
        Ok(())
    }

    /// Set the bottom edge length; re-derives geometry and clears the cache.
    pub fn set_b(&mut self, b: f64) -> Result<(), ParameterError> {
        check_positive("b", b)?;
        self.b = b;
        self.rederive();
        self.invalidate_cache();
        Ok(())
    }

    /// Set the mountain-crease length; re-derives geometry and clears the cache.
    pub fn set_c(&mut self, c: f64) -> Result<(), ParameterError> {
        check_positive("c", c)?;
        self.c = c;
        self.rederive();
        self.invalidate_cache();
        Ok(())
    }

    /// Set the crease angle; re-derives geometry and clears the cache.
    pub fn set_beta(&mut self, beta: f64) -> Result<(), ParameterError> {
        if !(beta > 0.0 && beta < std::f64::consts::PI) {
            return Err(ParameterError::BetaOutOfRange(beta));
        }
        self.beta = beta;
        self.rederive();
        self.invalidate_cache();
        Ok(())
    }

    /// Set the axial stiffness. Rescales `km`/`kv` only; the stable-state
    /// pair is purely geometric, so the cache stays valid.
    pub fn set_ea(&mut self, ea: f64) -> Result<(), ParameterError> {
        check_positive("EA", ea)?;
        self.ea = ea;
        self.rederive();
        Ok(())
    }

    /// Strained crease lengths at fold state `(h, phi)`.
    ///
    /// ```text
    /// c~ = sqrt(h^2 + r^2 + R^2 - 2 r R cos(phi))
    /// d~ = sqrt(h^2 + r^2 + R^2 - 2 r R cos(phi + 2 pi / n))
    /// ```
    ///
    /// The radicands are non-negative for real geometry; they are clamped
    /// to zero to absorb floating-point noise.
    pub fn crease_lengths(&self, h: f64, phi: f64) -> CreaseLengths {
        let base = h * h + self.r * self.r + self.R * self.R;
        let two_rr = 2.0 * self.r * self.R;

        let c_tilde = (base - two_rr * phi.cos()).max(0.0).sqrt();
        let d_tilde = (base - two_rr * (phi + self.sector_angle()).cos())
            .max(0.0)
            .sqrt();

        CreaseLengths { c_tilde, d_tilde }
    }
}

impl Default for KreslingUnit {
    /// The reference configuration: `n=6, a=1, b=2, c=3, beta=1.5, EA=1`.
    fn default() -> Self {
        Self::from_validated(UnitParameters::default())
    }
}
