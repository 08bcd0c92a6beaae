//! Fold-state to 3D vertex coordinates.
//!
//! This is the sole bridge from the mechanical model to 3D space; renderers
//! and stacking consumers read these coordinates and own everything else.

use glam::DVec3;

use super::KreslingUnit;

/// 3D realization of a unit at one fold state.
///
/// Bottom vertex `i` sits on a circle of radius `R` at angle `2 pi i / n`,
/// height `-h/2`; top vertex `i` on a circle of radius `r` at angle
/// `2 pi i / n + phi`, height `+h/2`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexCoordinates {
    /// Top polygon vertices, counter-clockwise, length `n`
    pub top: Vec<DVec3>,
    /// Bottom polygon vertices, counter-clockwise, length `n`
    pub bottom: Vec<DVec3>,
    /// Center of the top polygon, `(0, 0, h/2)`
    pub mid_point: DVec3,
}

impl KreslingUnit {
    /// Compute the vertex coordinates for fold state `(h, phi)`.
    pub fn vertex_coordinates(&self, h: f64, phi: f64) -> VertexCoordinates {
        let n = self.n() as usize;
        let sector = self.sector_angle();

        let mut top = Vec::with_capacity(n);
        let mut bottom = Vec::with_capacity(n);

        for i in 0..n {
            let theta = sector * i as f64;
            bottom.push(DVec3::new(
                self.R() * theta.cos(),
                self.R() * theta.sin(),
                -h / 2.0,
            ));
            top.push(DVec3::new(
                self.r() * (theta + phi).cos(),
                self.r() * (theta + phi).sin(),
                h / 2.0,
            ));
        }

        VertexCoordinates {
            top,
            bottom,
            mid_point: DVec3::new(0.0, 0.0, h / 2.0),
        }
    }
}
