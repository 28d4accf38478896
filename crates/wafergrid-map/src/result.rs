//! Assembled wafer-map results.

use crate::filter::{classify, ClassifiedPoint};
use crate::grid::GridGenerator;
use crate::shapes::ExclusionShape;
use crate::wafer::WaferSpec;
use serde::{Deserialize, Serialize};
use wafergrid_core::WaferGridResult;

/// The classified measurement grid for one wafer specification.
///
/// Built fresh on every parameter or shape change; superseded results are
/// discarded rather than mutated. Classification is a pure function of the
/// spec and the zones, so rebuilding is always safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridResult {
    pub spec: WaferSpec,
    pub shapes: Vec<ExclusionShape>,
    pub points: Vec<ClassifiedPoint>,
}

impl GridResult {
    /// Generates and classifies the full grid for `spec` against `shapes`.
    ///
    /// Shapes are validated here because they arrive from outside the
    /// engine; the generated points never need validation.
    pub fn compute(spec: WaferSpec, shapes: &[ExclusionShape]) -> WaferGridResult<Self> {
        for shape in shapes {
            shape.validate()?;
        }
        let candidates = GridGenerator::new(spec).generate()?;
        let points = classify(&candidates, shapes);
        Ok(Self {
            spec,
            shapes: shapes.to_vec(),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn included_count(&self) -> usize {
        self.points.iter().filter(|p| p.included).count()
    }

    pub fn excluded_count(&self) -> usize {
        self.points.len() - self.included_count()
    }

    /// Points that survived every exclusion zone.
    pub fn included(&self) -> impl Iterator<Item = &ClassifiedPoint> {
        self.points.iter().filter(|p| p.included)
    }
}
