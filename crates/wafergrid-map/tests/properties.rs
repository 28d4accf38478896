use proptest::prelude::*;
use wafergrid_core::Point;
use wafergrid_map::{classify, ExclusionShape, GridGenerator, GridKind, WaferSpec};

fn grid_kind() -> impl Strategy<Value = GridKind> {
    prop_oneof![Just(GridKind::Rectangular), Just(GridKind::Hexagonal)]
}

proptest! {
    #[test]
    fn generated_points_stay_on_wafer(
        diameter in 20.0..120.0f64,
        pitch in 1.0..8.0f64,
        grid in grid_kind(),
    ) {
        let spec = WaferSpec::new(diameter, pitch, grid);
        let points = GridGenerator::new(spec).generate().unwrap();
        let limit = diameter / 2.0 * (1.0 + 1e-9);
        for p in &points {
            prop_assert!(p.radius() <= limit);
        }
    }

    #[test]
    fn origin_always_generated(
        diameter in 20.0..120.0f64,
        pitch in 1.0..8.0f64,
        grid in grid_kind(),
    ) {
        let spec = WaferSpec::new(diameter, pitch, grid);
        let points = GridGenerator::new(spec).generate().unwrap();
        prop_assert!(points.contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn hexagonal_no_sparser_than_rectangular(
        diameter in 40.0..120.0f64,
        pitch in 1.0..4.0f64,
    ) {
        let rect = GridGenerator::new(WaferSpec::new(diameter, pitch, GridKind::Rectangular))
            .generate()
            .unwrap();
        let hex = GridGenerator::new(WaferSpec::new(diameter, pitch, GridKind::Hexagonal))
            .generate()
            .unwrap();
        prop_assert!(hex.len() >= rect.len());
    }

    #[test]
    fn empty_zone_set_is_identity(
        diameter in 20.0..80.0f64,
        pitch in 1.0..8.0f64,
        grid in grid_kind(),
    ) {
        let spec = WaferSpec::new(diameter, pitch, grid);
        let points = GridGenerator::new(spec).generate().unwrap();
        let classified = classify(&points, &[]);
        prop_assert_eq!(classified.len(), points.len());
        for (c, p) in classified.iter().zip(points.iter()) {
            prop_assert!(c.included);
            prop_assert_eq!(c.point, *p);
        }
    }

    #[test]
    fn circle_center_always_excluded(
        cx in -20.0..20.0f64,
        cy in -20.0..20.0f64,
        radius in 0.1..10.0f64,
    ) {
        let shapes = [ExclusionShape::circle(Point::new(cx, cy), radius)];
        let classified = classify(&[Point::new(cx, cy)], &shapes);
        prop_assert!(!classified[0].included);
    }

    #[test]
    fn classification_is_deterministic(
        diameter in 20.0..80.0f64,
        pitch in 1.0..8.0f64,
        radius in 1.0..20.0f64,
    ) {
        let spec = WaferSpec::new(diameter, pitch, GridKind::Hexagonal);
        let shapes = [ExclusionShape::circle(Point::new(0.0, 0.0), radius)];
        let points = GridGenerator::new(spec).generate().unwrap();
        let a = classify(&points, &shapes);
        let b = classify(&points, &shapes);
        prop_assert_eq!(a, b);
    }
}
