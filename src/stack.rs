//! Thin multi-layer assembly of Kresling units.
//!
//! A stack is an ordered sequence of units where each layer's top polygon
//! is the next layer's bottom polygon. The stack itself adds no mechanics:
//! it aggregates per-layer outputs (stable heights, barriers, coordinates)
//! for curvature and energy programming consumers. Parameter search against
//! a target surface or barrier profile lives outside this crate.

use glam::{DMat3, DVec3};
use serde::Serialize;
use thiserror::Error;

use crate::geometry::{FoldState, KreslingUnit, VertexCoordinates};

/// Edge-continuity tolerance between adjacent layers, relative to the
/// shared edge length.
const EDGE_MATCH_TOLERANCE: f64 = 1e-9;

/// Rejected stack composition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StackError {
    /// A stack needs at least one layer.
    #[error("a stack needs at least one layer")]
    Empty,

    /// Adjacent layers must share an edge length.
    #[error("layer {layer} bottom edge {actual} does not match the top edge {expected} of the layer below")]
    EdgeMismatch {
        /// Index of the upper layer of the mismatched pair.
        layer: usize,
        /// Top edge of the layer below.
        expected: f64,
        /// Bottom edge of the layer above.
        actual: f64,
    },

    /// One fold state per layer is required.
    #[error("expected {expected} fold states, got {actual}")]
    StateCountMismatch {
        /// Number of layers.
        expected: usize,
        /// Number of fold states supplied.
        actual: usize,
    },
}

/// Per-layer parameter and stability summary, one row of the export table.
///
/// `b1` is the layer's bottom edge, `b2` its top edge; `h1`/`h2` are the
/// stable heights (0 when the layer has no stable state).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LayerRecord {
    /// 1-based layer index
    pub layer: usize,
    /// Bottom-polygon edge length
    pub b1: f64,
    /// Top-polygon edge length
    pub b2: f64,
    /// Mountain-crease length
    pub c: f64,
    /// Crease angle (radians)
    pub beta: f64,
    /// First stable height
    pub h1: f64,
    /// Second stable height
    pub h2: f64,
    /// Energy-barrier approximation for this layer
    pub energy_barrier: f64,
}

impl LayerRecord {
    /// Summarize one unit as table row `layer`.
    pub fn from_unit(layer: usize, unit: &KreslingUnit) -> Self {
        let states = unit.stable_states();
        Self {
            layer,
            b1: unit.b(),
            b2: unit.a(),
            c: unit.c(),
            beta: unit.beta(),
            h1: states.state1.map_or(0.0, |s| s.h),
            h2: states.state2.map_or(0.0, |s| s.h),
            energy_barrier: unit.energy_barrier(),
        }
    }
}

/// An ordered tower of Kresling units, bottom layer first.
#[derive(Debug, Clone)]
pub struct KreslingStack {
    layers: Vec<KreslingUnit>,
}

impl KreslingStack {
    /// Build a stack, enforcing edge continuity between adjacent layers.
    pub fn new(layers: Vec<KreslingUnit>) -> Result<Self, StackError> {
        if layers.is_empty() {
            return Err(StackError::Empty);
        }

        for (i, pair) in layers.windows(2).enumerate() {
            let expected = pair[0].a();
            let actual = pair[1].b();
            if (actual - expected).abs() > EDGE_MATCH_TOLERANCE * expected.max(actual) {
                return Err(StackError::EdgeMismatch {
                    layer: i + 1,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self { layers })
    }

    /// The layers, bottom first.
    pub fn layers(&self) -> &[KreslingUnit] {
        &self.layers
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Per-layer summary rows, bottom first, 1-based layer numbers.
    pub fn records(&self) -> Vec<LayerRecord> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, unit)| LayerRecord::from_unit(i + 1, unit))
            .collect()
    }

    /// Total height with every layer at its taller stable height.
    pub fn deployed_height(&self) -> f64 {
        self.layers
            .iter()
            .map(|unit| {
                let states = unit.stable_states();
                let h1 = states.state1.map_or(0.0, |s| s.h);
                let h2 = states.state2.map_or(0.0, |s| s.h);
                h1.max(h2)
            })
            .sum()
    }

    /// Total height with every layer at its shorter stable height.
    pub fn folded_height(&self) -> f64 {
        self.layers
            .iter()
            .map(|unit| {
                let states = unit.stable_states();
                let h1 = states.state1.map_or(0.0, |s| s.h);
                let h2 = states.state2.map_or(0.0, |s| s.h);
                h1.min(h2)
            })
            .sum()
    }

    /// Stacked vertex coordinates for one fold state per layer.
    ///
    /// Layer k is lifted so its bottom polygon sits on layer k-1's top
    /// polygon and rotated by the accumulated twist of the layers below,
    /// so each returned set lives in one global frame with the stack base
    /// at z = 0.
    pub fn vertex_coordinates(
        &self,
        states: &[FoldState],
    ) -> Result<Vec<VertexCoordinates>, StackError> {
        if states.len() != self.layers.len() {
            return Err(StackError::StateCountMismatch {
                expected: self.layers.len(),
                actual: states.len(),
            });
        }

        let mut stacked = Vec::with_capacity(self.layers.len());
        let mut z_offset = 0.0;
        let mut twist_offset = 0.0;

        for (unit, state) in self.layers.iter().zip(states) {
            let coords = unit.vertex_coordinates(state.h, state.phi);
            let rotation = DMat3::from_rotation_z(twist_offset);
            // Unit coordinates are centered on z = 0; shift the bottom ring
            // onto the current top of the stack.
            let lift = DVec3::new(0.0, 0.0, z_offset + state.h / 2.0);

            stacked.push(VertexCoordinates {
                top: coords.top.iter().map(|&v| rotation * v + lift).collect(),
                bottom: coords.bottom.iter().map(|&v| rotation * v + lift).collect(),
                mid_point: rotation * coords.mid_point + lift,
            });

            z_offset += state.h;
            twist_offset += state.phi;
        }

        Ok(stacked)
    }
}
