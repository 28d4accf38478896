use serde::{Deserialize, Serialize};

/// A point in wafer coordinates: millimeters, origin at the wafer center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the wafer center.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates `p` around `center` by `angle_deg` degrees, counter-clockwise.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}
