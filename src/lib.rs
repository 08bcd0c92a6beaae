//! Kresling Sim - mechanics engine for conical Kresling origami units.
//!
//! This library models the twisted, creased cylindrical/conical shell of a
//! Kresling unit: crease lengths, elastic strain energy over fold states
//! (height, twist), equilibrium twist search, closed-form stable states,
//! bistability phase classification, energy barriers, and the 3D vertex
//! coordinates consumed by renderers and multi-layer stacking.

// Allow non-snake-case for the paper's symbol names (R, EA) in fields and
// accessors. This follows the project convention of keeping the published
// notation readable in code.
#![allow(non_snake_case)]

pub mod config;
pub mod export;
pub mod geometry;
pub mod mechanics;
pub mod stack;

pub use config::{LandscapeParameters, Parameters, UnitParameters};
pub use export::{export_crease_pattern_frame, export_layer_table, write_layer_table};
pub use geometry::{
    CreaseLengths, FoldState, KreslingUnit, ParameterError, UnitMesh, VertexCoordinates,
};
pub use mechanics::{EnergyLandscape, LandscapePoint, Phase, StableStates};
pub use stack::{KreslingStack, LayerRecord, StackError};
