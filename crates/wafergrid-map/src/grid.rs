//! Measurement lattice generation.
//!
//! Lays a rectangular or hexagonal lattice over the wafer, anchored at the
//! wafer center, keeping the nodes inside the usable radius. Containment is
//! boundary-inclusive with a small tolerance so nodes exactly on the edge
//! survive floating-point rounding.

use crate::wafer::{GridKind, HexOrientation, WaferSpec};
use wafergrid_core::{Point, WaferGridResult};

/// Tolerance for the radius test, relative to the wafer radius.
pub(crate) const CONTAINMENT_EPSILON: f64 = 1e-9;

/// Generates candidate measurement points for a wafer specification.
pub struct GridGenerator {
    spec: WaferSpec,
}

impl GridGenerator {
    pub fn new(spec: WaferSpec) -> Self {
        Self { spec }
    }

    /// Generates all lattice nodes inside the usable wafer radius, ordered
    /// by increasing y, then increasing x within a row.
    pub fn generate(&self) -> WaferGridResult<Vec<Point>> {
        self.spec.validate()?;

        let limit = self.spec.usable_radius() + self.spec.radius() * CONTAINMENT_EPSILON;
        let mut points = match self.spec.grid {
            GridKind::Rectangular => self.rectangular(limit),
            GridKind::Hexagonal => self.hexagonal(limit),
        };
        // Row-major scan order, stable across runs for identical inputs.
        points.sort_by(|a, b| a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)));

        tracing::debug!(
            count = points.len(),
            grid = %self.spec.grid,
            "generated candidate lattice"
        );
        Ok(points)
    }

    fn rectangular(&self, limit: f64) -> Vec<Point> {
        let pitch = self.spec.pitch;
        let steps = (limit / pitch).floor() as i64;
        let limit_sq = limit * limit;
        let mut points = Vec::new();
        for j in -steps..=steps {
            let y = j as f64 * pitch;
            for i in -steps..=steps {
                let x = i as f64 * pitch;
                if x * x + y * y <= limit_sq {
                    points.push(Point::new(x, y));
                }
            }
        }
        points
    }

    fn hexagonal(&self, limit: f64) -> Vec<Point> {
        // Hex close packing: lines at (√3/2)·pitch spacing, every other line
        // shifted by half a pitch along its own axis.
        let pitch = self.spec.pitch;
        let line_step = pitch * 3.0_f64.sqrt() / 2.0;
        let lines = (limit / line_step).floor() as i64;
        let nodes = (limit / pitch).floor() as i64 + 1;
        let limit_sq = limit * limit;
        let mut points = Vec::new();
        for j in -lines..=lines {
            let along_offset = if j.rem_euclid(2) == 1 { pitch / 2.0 } else { 0.0 };
            for i in -nodes..=nodes {
                let (x, y) = match self.spec.hex_orientation {
                    HexOrientation::PointyTop => {
                        (i as f64 * pitch + along_offset, j as f64 * line_step)
                    }
                    HexOrientation::FlatTop => {
                        (j as f64 * line_step, i as f64 * pitch + along_offset)
                    }
                };
                if x * x + y * y <= limit_sq {
                    points.push(Point::new(x, y));
                }
            }
        }
        points
    }
}
