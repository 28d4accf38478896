//! Coordinate table generation.

use serde::{Deserialize, Serialize};
use wafergrid_core::{WaferGridError, WaferGridResult};
use wafergrid_map::GridResult;

/// Options controlling coordinate export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Write excluded points too, marked `included=false`.
    pub include_excluded: bool,
    /// Decimal places per coordinate.
    pub decimal_places: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_excluded: false,
            decimal_places: 6,
        }
    }
}

/// Renders grid results as the tabular download payload.
pub struct CoordinateExporter {
    options: ExportOptions,
}

impl CoordinateExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Serializes `result` to CSV bytes.
    ///
    /// A point's index is its position in the full classified sequence, so
    /// indices stay stable whether or not excluded rows are written. Fails
    /// with `EmptyResult` when there are no rows, so the caller can warn
    /// instead of offering an empty download.
    pub fn export(&self, result: &GridResult) -> WaferGridResult<Vec<u8>> {
        let rows: Vec<(usize, bool, f64, f64)> = result
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.options.include_excluded || p.included)
            .map(|(index, p)| (index, p.included, p.point.x, p.point.y))
            .collect();

        if rows.is_empty() {
            return Err(WaferGridError::EmptyResult(
                "no measurement points to export".to_string(),
            ));
        }

        let places = self.options.decimal_places;
        let mut csv = String::new();
        csv.push_str("index,x,y,included\n");
        for (index, included, x, y) in &rows {
            csv.push_str(&format!(
                "{},{:.p$},{:.p$},{}\n",
                index,
                x,
                y,
                included,
                p = places
            ));
        }

        tracing::debug!(
            rows = rows.len(),
            include_excluded = self.options.include_excluded,
            "exported coordinate table"
        );
        Ok(csv.into_bytes())
    }
}

/// One-call export with default precision.
pub fn export_csv(result: &GridResult, include_excluded: bool) -> WaferGridResult<Vec<u8>> {
    CoordinateExporter::new(ExportOptions {
        include_excluded,
        ..Default::default()
    })
    .export(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wafergrid_core::Point;
    use wafergrid_map::{ExclusionShape, GridKind, WaferSpec};

    fn small_result(shapes: &[ExclusionShape]) -> GridResult {
        GridResult::compute(WaferSpec::new(10.0, 5.0, GridKind::Rectangular), shapes).unwrap()
    }

    #[test]
    fn test_export_payload_layout() {
        let payload = export_csv(&small_result(&[]), false).unwrap();
        let text = String::from_utf8(payload).unwrap();
        assert_eq!(
            text,
            "index,x,y,included\n\
             0,0.000000,-5.000000,true\n\
             1,-5.000000,0.000000,true\n\
             2,0.000000,0.000000,true\n\
             3,5.000000,0.000000,true\n\
             4,0.000000,5.000000,true\n"
        );
    }

    #[test]
    fn test_excluded_rows_skipped_but_indices_stable() {
        let shapes = [ExclusionShape::circle(Point::new(0.0, 0.0), 1.0)];
        let result = small_result(&shapes);

        let text = String::from_utf8(export_csv(&result, false).unwrap()).unwrap();
        // The origin (index 2) is excluded; its index is simply absent
        assert!(!text.contains("\n2,"));
        assert!(text.contains("\n3,5.000000,0.000000,true\n"));
        assert_eq!(text.lines().count(), 5); // header + 4 rows
    }

    #[test]
    fn test_include_excluded_marks_rows() {
        let shapes = [ExclusionShape::circle(Point::new(0.0, 0.0), 1.0)];
        let text =
            String::from_utf8(export_csv(&small_result(&shapes), true).unwrap()).unwrap();
        assert!(text.contains("2,0.000000,0.000000,false\n"));
        assert_eq!(text.lines().count(), 6); // header + all 5 rows
    }

    #[test]
    fn test_empty_export_is_an_error() {
        // A zone swallowing the whole wafer leaves nothing to export
        let shapes = [ExclusionShape::circle(Point::new(0.0, 0.0), 100.0)];
        let err = export_csv(&small_result(&shapes), false).unwrap_err();
        assert!(matches!(err, WaferGridError::EmptyResult(_)));

        // ...unless excluded rows are requested
        assert!(export_csv(&small_result(&shapes), true).is_ok());
    }

    #[test]
    fn test_decimal_places_option() {
        let exporter = CoordinateExporter::new(ExportOptions {
            include_excluded: false,
            decimal_places: 2,
        });
        let text = String::from_utf8(exporter.export(&small_result(&[])).unwrap()).unwrap();
        assert!(text.contains("0,0.00,-5.00,true\n"));
    }
}
