//! Parameter structures for the Kresling unit model.
//!
//! Default values reproduce the reference configuration used throughout
//! the Kresling bistability literature (n=6 hexagonal unit).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Geometric parameters of a single Kresling unit
    pub unit: UnitParameters,
    /// Sampling settings for energy-landscape queries
    pub landscape: LandscapeParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let unit = UnitParameters::load_or_default("data/parameters/unit.json");
        let landscape = LandscapeParameters::load_or_default("data/parameters/landscape.json");

        Self { unit, landscape }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let unit = UnitParameters::load_or_default(dir.join("unit.json"));
        let landscape = LandscapeParameters::load_or_default(dir.join("landscape.json"));

        Self { unit, landscape }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            unit: UnitParameters::default(),
            landscape: LandscapeParameters::default(),
        }
    }
}

/// Geometric parameters for a single conical Kresling unit
///
/// A unit is a ring of `n` creased parallelogram-like cells between a top
/// polygon (edge `a`) and a bottom polygon (edge `b`), joined by mountain
/// creases of length `c` meeting the bottom edge at angle `beta`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitParameters {
    /// Number of unit cells around the polygon (>= 3)
    pub n: u32,

    /// Top-polygon edge length
    pub a: f64,

    /// Bottom-polygon edge length
    pub b: f64,

    /// Mountain-crease (side) length
    pub c: f64,

    /// Angle between the bottom edge and the mountain crease (radians, in (0, pi))
    pub beta: f64,

    /// Axial stiffness coefficient EA shared by all creases
    pub ea: f64,
}

impl UnitParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded unit parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse unit parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Unit parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for UnitParameters {
    fn default() -> Self {
        Self {
            n: 6,
            a: 1.0,
            b: 2.0,
            c: 3.0,
            beta: 1.5,
            ea: 1.0,
        }
    }
}

/// Sampling settings for energy-landscape computation
///
/// These only affect how densely displays sample the landscape; the model
/// itself is continuous in (h, phi).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LandscapeParameters {
    /// Lowest sampled height
    pub h_min: f64,

    /// Highest sampled height
    pub h_max: f64,

    /// Number of height intervals (steps + 1 samples are produced)
    pub steps: usize,
}

impl LandscapeParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded landscape parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse landscape parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Landscape parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for LandscapeParameters {
    fn default() -> Self {
        Self {
            h_min: 0.0,
            h_max: 4.0,
            steps: 100,
        }
    }
}
