//! Geometry of the conical Kresling unit.
//!
//! Contains the unit itself (inputs, derived quantities, crease lengths)
//! and its 3D realization (vertex coordinates and triangulated mesh).

mod mesh;
mod unit;
mod vertices;

pub use mesh::UnitMesh;
pub use unit::{CreaseLengths, FoldState, KreslingUnit, ParameterError};
pub use vertices::VertexCoordinates;
