use pie_compose::core::{
    DataPoint, SeriesDeclaration, SliceStyle, aggregate_legend, compose, resolve_geometry,
};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = DataPoint> {
    (
        "[a-z]{1,6}",
        -1_000.0f64..1_000.0,
        proptest::option::of("#[0-9a-f]{6}"),
        proptest::option::of(0.0f64..8.0),
    )
        .prop_map(|(name, value, fill, stroke_width)| {
            let mut point = DataPoint::new(name, value);
            point.style.fill = fill;
            point.style.stroke_width = stroke_width;
            point
        })
}

fn arb_series() -> impl Strategy<Value = SeriesDeclaration> {
    (
        proptest::collection::vec(arb_point(), 0..24),
        proptest::option::of("#[0-9a-f]{6}"),
        proptest::option::of(0.0f64..8.0),
    )
        .prop_map(|(data, fill, stroke_width)| {
            let mut style = SliceStyle::new();
            style.fill = fill;
            style.stroke_width = stroke_width;
            SeriesDeclaration::new(data).with_style(style)
        })
}

proptest! {
    #[test]
    fn compose_is_pure_and_point_attributes_win(series in arb_series()) {
        let first = compose(&series).expect("compose");
        let second = compose(&series).expect("compose again");
        prop_assert_eq!(&first, &second);

        let data = series.data.as_deref().expect("data");
        prop_assert_eq!(first.len(), data.len());
        for (record, point) in first.iter().zip(data) {
            prop_assert_eq!(&record.name, &point.name);
            prop_assert_eq!(record.value, point.value);
            let expected_fill = point.style.fill.clone().or_else(|| series.style.fill.clone());
            prop_assert_eq!(&record.style.fill, &expected_fill);
            let expected_width = point.style.stroke_width.or(series.style.stroke_width);
            prop_assert_eq!(record.style.stroke_width, expected_width);
        }
    }

    #[test]
    fn legend_length_and_order_match_composition(
        all in proptest::collection::vec(arb_series(), 0..6)
    ) {
        let refs: Vec<&SeriesDeclaration> = all.iter().collect();
        let entries = aggregate_legend(&refs);

        let expected: Vec<(String, Option<String>)> = all
            .iter()
            .flat_map(|series| compose(series).expect("compose"))
            .map(|record| (record.name, record.style.fill))
            .collect();
        let actual: Vec<(String, Option<String>)> = entries
            .into_iter()
            .map(|entry| (entry.value, entry.color))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn default_geometry_stays_inside_container(
        width in 0.0f64..4_000.0,
        height in 0.0f64..4_000.0
    ) {
        let geometry = resolve_geometry(&SeriesDeclaration::new(Vec::new()), width, height)
            .expect("geometry");

        prop_assert!(geometry.outer_radius >= 0.0);
        prop_assert!(geometry.cx - geometry.outer_radius >= -1e-9);
        prop_assert!(geometry.cy - geometry.outer_radius >= -1e-9);
        prop_assert!(geometry.cx + geometry.outer_radius <= width + 1e-9);
        prop_assert!(geometry.cy + geometry.outer_radius <= height + 1e-9);
    }

    #[test]
    fn explicit_geometry_is_never_replaced(
        cx in -500.0f64..500.0,
        cy in -500.0f64..500.0,
        radius in 0.0f64..500.0,
        width in 0.0f64..2_000.0,
        height in 0.0f64..2_000.0
    ) {
        let series = SeriesDeclaration::new(Vec::new())
            .with_center(cx, cy)
            .with_outer_radius(radius);
        let geometry = resolve_geometry(&series, width, height).expect("geometry");

        prop_assert_eq!(geometry.cx, cx);
        prop_assert_eq!(geometry.cy, cy);
        prop_assert_eq!(geometry.outer_radius, radius);
    }
}
