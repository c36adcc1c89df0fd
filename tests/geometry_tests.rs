use approx::assert_relative_eq;
use pie_compose::ChartError;
use pie_compose::core::{
    DataPoint, GeometryDefaults, SeriesDeclaration, resolve_geometry, resolve_geometry_or_zero,
};

fn series() -> SeriesDeclaration {
    SeriesDeclaration::new(vec![DataPoint::new("A", 1.0)])
}

#[test]
fn missing_geometry_defaults_to_container_center_and_radius() {
    let geometry = resolve_geometry(&series(), 200.0, 100.0).expect("geometry");

    assert_relative_eq!(geometry.cx, 100.0);
    assert_relative_eq!(geometry.cy, 50.0);
    assert_relative_eq!(geometry.outer_radius, 40.0);
}

#[test]
fn explicit_geometry_passes_through_unchanged() {
    let declared = series().with_center(10.0, 10.0).with_outer_radius(5.0);

    for (width, height) in [(200.0, 100.0), (0.0, 0.0), (1920.0, 1080.0)] {
        let geometry = resolve_geometry(&declared, width, height).expect("geometry");
        assert_eq!(geometry, GeometryDefaults::new(10.0, 10.0, 5.0));
    }
}

#[test]
fn explicit_zero_values_are_respected() {
    let declared = series().with_center(0.0, 0.0).with_outer_radius(0.0);

    let geometry = resolve_geometry(&declared, 400.0, 300.0).expect("geometry");

    assert_eq!(geometry, GeometryDefaults::new(0.0, 0.0, 0.0));
}

#[test]
fn partially_declared_geometry_mixes_explicit_and_defaults() {
    let mut declared = series();
    declared.cx = Some(30.0);

    let geometry = resolve_geometry(&declared, 300.0, 500.0).expect("geometry");

    assert_relative_eq!(geometry.cx, 30.0);
    assert_relative_eq!(geometry.cy, 250.0);
    assert_relative_eq!(geometry.outer_radius, 120.0);
}

#[test]
fn zero_sized_container_yields_zero_radius() {
    let geometry = resolve_geometry(&series(), 0.0, 0.0).expect("geometry");
    assert_eq!(geometry, GeometryDefaults::new(0.0, 0.0, 0.0));
}

#[test]
fn negative_dimensions_are_rejected() {
    let err = resolve_geometry(&series(), -10.0, 100.0).expect_err("negative width");
    assert_eq!(
        err,
        ChartError::InvalidDimension {
            width: -10.0,
            height: 100.0
        }
    );
    assert!(resolve_geometry(&series(), f64::NAN, 100.0).is_err());
}

#[test]
fn invalid_dimensions_fall_back_to_zero_geometry() {
    let (geometry, error) = resolve_geometry_or_zero(&series(), 100.0, -1.0);
    assert_eq!(geometry, GeometryDefaults::new(0.0, 0.0, 0.0));
    assert!(matches!(error, Some(ChartError::InvalidDimension { .. })));

    let declared = series().with_outer_radius(12.0);
    let (geometry, error) = resolve_geometry_or_zero(&declared, -5.0, -5.0);
    assert_relative_eq!(geometry.outer_radius, 12.0);
    assert!(error.is_some());
}

#[test]
fn valid_dimensions_report_no_fallback_error() {
    let (geometry, error) = resolve_geometry_or_zero(&series(), 200.0, 100.0);
    assert!(error.is_none());
    assert_relative_eq!(geometry.outer_radius, 40.0);
}
