//! Point classification against exclusion zones.

use crate::shapes::ExclusionShape;
use serde::{Deserialize, Serialize};
use wafergrid_core::Point;

/// A lattice point together with its exclusion classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPoint {
    pub point: Point,
    /// False when the point falls inside any exclusion zone.
    pub included: bool,
}

/// Classifies points against a set of exclusion zones.
///
/// A point is excluded when it lies inside or on the boundary of any zone;
/// an empty zone set leaves every point included. Input order and values are
/// preserved.
pub fn classify(points: &[Point], shapes: &[ExclusionShape]) -> Vec<ClassifiedPoint> {
    points
        .iter()
        .map(|&point| ClassifiedPoint {
            point,
            included: !shapes.iter().any(|shape| shape.excludes(point)),
        })
        .collect()
}
