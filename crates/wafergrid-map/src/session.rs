//! Per-session engine state.
//!
//! Each user of the surrounding shell owns one [`MapSession`]; nothing in
//! this crate is process-global. The session carries the current wafer
//! specification, the exclusion zones in insertion order, and the timing
//! parameters used for measurement estimates.

use crate::result::GridResult;
use crate::shapes::ExclusionShape;
use crate::wafer::WaferSpec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wafergrid_core::WaferGridResult;

/// Projected measurement duration for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Number of points that will actually be measured.
    pub point_count: usize,
    pub total_seconds: f64,
}

impl TimeEstimate {
    pub fn total_minutes(&self) -> f64 {
        self.total_seconds / 60.0
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }
}

/// Session-scoped wafer-map state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSession {
    pub id: Uuid,
    spec: WaferSpec,
    shapes: Vec<ExclusionShape>,
    /// Measurement time per point (s)
    pub measurement_time_s: f64,
    /// Move/settle overhead per point (s)
    pub move_time_s: f64,
}

impl MapSession {
    pub fn new(spec: WaferSpec) -> WaferGridResult<Self> {
        spec.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            spec,
            shapes: Vec::new(),
            measurement_time_s: 10.0,
            move_time_s: 1.0,
        })
    }

    pub fn spec(&self) -> &WaferSpec {
        &self.spec
    }

    /// Replaces the wafer specification after validating it.
    pub fn set_spec(&mut self, spec: WaferSpec) -> WaferGridResult<()> {
        spec.validate()?;
        self.spec = spec;
        Ok(())
    }

    /// Exclusion zones in insertion order.
    pub fn shapes(&self) -> &[ExclusionShape] {
        &self.shapes
    }

    /// Adds an exclusion zone after validating it.
    pub fn add_shape(&mut self, shape: ExclusionShape) -> WaferGridResult<()> {
        shape.validate()?;
        tracing::debug!(
            session = %self.id,
            kind = shape.kind().name(),
            "added exclusion zone"
        );
        self.shapes.push(shape);
        Ok(())
    }

    /// Removes and returns the most recently added zone.
    pub fn pop_shape(&mut self) -> Option<ExclusionShape> {
        self.shapes.pop()
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    /// Recomputes the full grid from the current spec and zones.
    pub fn recompute(&self) -> WaferGridResult<GridResult> {
        let result = GridResult::compute(self.spec, &self.shapes)?;
        tracing::debug!(
            session = %self.id,
            included = result.included_count(),
            excluded = result.excluded_count(),
            "recomputed wafer map"
        );
        Ok(result)
    }

    /// Projects the total measurement duration for `result`.
    pub fn estimate(&self, result: &GridResult) -> TimeEstimate {
        let point_count = result.included_count();
        TimeEstimate {
            point_count,
            total_seconds: point_count as f64 * (self.measurement_time_s + self.move_time_s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wafer::GridKind;
    use wafergrid_core::Point;

    #[test]
    fn test_session_shape_lifecycle() {
        let mut session =
            MapSession::new(WaferSpec::new(10.0, 5.0, GridKind::Rectangular)).unwrap();

        session
            .add_shape(ExclusionShape::circle(Point::new(0.0, 0.0), 1.0))
            .unwrap();
        session
            .add_shape(ExclusionShape::rectangle(Point::new(0.0, 5.0), 2.0, 2.0))
            .unwrap();
        assert_eq!(session.shapes().len(), 2);

        // Undo removes the most recent zone
        let popped = session.pop_shape().unwrap();
        assert!(matches!(popped, ExclusionShape::Rectangle(_)));
        assert_eq!(session.shapes().len(), 1);

        session.clear_shapes();
        assert!(session.shapes().is_empty());
    }

    #[test]
    fn test_session_rejects_invalid_inputs() {
        assert!(MapSession::new(WaferSpec::new(-1.0, 5.0, GridKind::Rectangular)).is_err());

        let mut session =
            MapSession::new(WaferSpec::new(10.0, 5.0, GridKind::Rectangular)).unwrap();
        assert!(session
            .add_shape(ExclusionShape::circle(Point::new(0.0, 0.0), 0.0))
            .is_err());
        assert!(session
            .set_spec(WaferSpec::new(10.0, 20.0, GridKind::Rectangular))
            .is_err());
        // Failed updates leave the session untouched
        assert_eq!(session.spec().pitch, 5.0);
        assert!(session.shapes().is_empty());
    }

    #[test]
    fn test_estimate() {
        let session = MapSession::new(WaferSpec::new(10.0, 5.0, GridKind::Rectangular)).unwrap();
        let result = session.recompute().unwrap();
        let estimate = session.estimate(&result);
        // 5 points at 10 s measurement + 1 s move each
        assert_eq!(estimate.point_count, 5);
        assert_eq!(estimate.total_seconds, 55.0);
        assert!((estimate.total_minutes() - 55.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let spec = WaferSpec::new(10.0, 5.0, GridKind::Rectangular);
        let a = MapSession::new(spec).unwrap();
        let b = MapSession::new(spec).unwrap();
        assert_ne!(a.id, b.id);
    }
}
