//! Exclusion zones in wafer coordinates.
//!
//! Zones are circles or rectangles (optionally rotated about their center).
//! Containment is boundary-inclusive, matching the generator's convention
//! for the wafer edge.

use serde::{Deserialize, Serialize};
use wafergrid_core::{rotate_point, Point, ShapeError, ShapeResult};

/// Relative tolerance applied to boundary containment tests.
const SHAPE_EPSILON: f64 = 1e-9;

/// A circular keep-out region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionCircle {
    pub center: Point,
    pub radius: f64,
}

impl ExclusionCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn validate(&self) -> ShapeResult<()> {
        for (name, value) in [
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(ShapeError::NotFinite { name, value });
            }
        }
        if self.radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius { value: self.radius });
        }
        Ok(())
    }

    /// Boundary-inclusive containment test.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.distance_to(&self.center) <= self.radius + tolerance
    }

    /// Axis-aligned bounding box (min x, min y, max x, max y).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

/// A rectangular keep-out region, optionally rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRect {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in degrees, counter-clockwise.
    #[serde(default)]
    pub rotation: f64,
}

impl ExclusionRect {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builds from the corner form (x, y, width, height) that drawing layers
    /// usually digitize to.
    pub fn from_corner(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Point::new(x + width / 2.0, y + height / 2.0),
            width,
            height,
        )
    }

    pub fn validate(&self) -> ShapeResult<()> {
        for (name, value) in [
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
        ] {
            if !value.is_finite() {
                return Err(ShapeError::NotFinite { name, value });
            }
        }
        if self.width <= 0.0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "width",
                value: self.width,
            });
        }
        if self.height <= 0.0 {
            return Err(ShapeError::NonPositiveDimension {
                name: "height",
                value: self.height,
            });
        }
        Ok(())
    }

    /// Boundary-inclusive containment test.
    ///
    /// The point is rotated into the rectangle's local frame, then compared
    /// against the half extents.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let angle = (-self.rotation).to_radians();
        let (s, c) = angle.sin_cos();
        let local_x = dx * c - dy * s;
        let local_y = dx * s + dy * c;
        local_x.abs() <= self.width / 2.0 + tolerance
            && local_y.abs() <= self.height / 2.0 + tolerance
    }

    /// Axis-aligned bounding box of the rotated rectangle.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let corners = [
            Point::new(self.center.x - half_w, self.center.y - half_h),
            Point::new(self.center.x + half_w, self.center.y - half_h),
            Point::new(self.center.x - half_w, self.center.y + half_h),
            Point::new(self.center.x + half_w, self.center.y + half_h),
        ];
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for corner in corners {
            let p = rotate_point(corner, self.center, self.rotation);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// Shape kind discriminant, for display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

/// A keep-out region where measurement points must not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ExclusionShape {
    Circle(ExclusionCircle),
    Rectangle(ExclusionRect),
}

impl ExclusionShape {
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle(ExclusionCircle::new(center, radius))
    }

    pub fn rectangle(center: Point, width: f64, height: f64) -> Self {
        Self::Rectangle(ExclusionRect::new(center, width, height))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ExclusionShape::Circle(_) => ShapeKind::Circle,
            ExclusionShape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    pub fn validate(&self) -> ShapeResult<()> {
        match self {
            ExclusionShape::Circle(s) => s.validate(),
            ExclusionShape::Rectangle(s) => s.validate(),
        }
    }

    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        match self {
            ExclusionShape::Circle(s) => s.contains(p, tolerance),
            ExclusionShape::Rectangle(s) => s.contains(p, tolerance),
        }
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            ExclusionShape::Circle(s) => s.bounds(),
            ExclusionShape::Rectangle(s) => s.bounds(),
        }
    }

    /// Containment with the shape's own size-relative tolerance.
    pub fn excludes(&self, p: Point) -> bool {
        self.contains(p, self.containment_tolerance())
    }

    fn containment_tolerance(&self) -> f64 {
        match self {
            ExclusionShape::Circle(s) => s.radius * SHAPE_EPSILON,
            ExclusionShape::Rectangle(s) => s.width.max(s.height) / 2.0 * SHAPE_EPSILON,
        }
    }
}
