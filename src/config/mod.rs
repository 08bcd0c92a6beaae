//! Configuration module for loading model parameters.
//!
//! Parameters are plain serde structs with documented defaults; JSON files
//! under `data/parameters/` override them when present.

mod parameters;

pub use parameters::{LandscapeParameters, Parameters, UnitParameters};
