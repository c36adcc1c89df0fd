use criterion::{Criterion, criterion_group, criterion_main};
use pie_compose::api::assemble_scene;
use pie_compose::core::{
    ChartNode, DataPoint, LegendDeclaration, SeriesDeclaration, TooltipDeclaration, compose,
};
use pie_compose::interaction::InteractionState;
use pie_compose::PieChartConfig;
use std::hint::black_box;

fn wide_series(points: usize) -> SeriesDeclaration {
    SeriesDeclaration::new(
        (0..points)
            .map(|i| {
                let point = DataPoint::new(format!("slice-{i}"), (i % 17) as f64 + 1.0);
                if i % 3 == 0 {
                    point.with_fill("#3366cc")
                } else {
                    point
                }
            })
            .collect(),
    )
    .with_fill("#dc3912")
}

fn bench_compose_10k(c: &mut Criterion) {
    let series = wide_series(10_000);

    c.bench_function("compose_10k", |b| {
        b.iter(|| {
            let _ = compose(black_box(&series)).expect("compose should succeed");
        })
    });
}

fn bench_assemble_scene_8x500(c: &mut Criterion) {
    let mut tree: Vec<ChartNode> = (0..8)
        .map(|_| ChartNode::Series(wide_series(500)))
        .collect();
    tree.push(ChartNode::Legend(LegendDeclaration::default()));
    tree.push(ChartNode::Tooltip(TooltipDeclaration::default()));
    let config = PieChartConfig::new(1280.0, 720.0);
    let state = InteractionState::default();

    c.bench_function("assemble_scene_8x500", |b| {
        b.iter(|| {
            let _ = assemble_scene(black_box(&config), black_box(&tree), black_box(&state));
        })
    });
}

criterion_group!(benches, bench_compose_10k, bench_assemble_scene_8x500);
criterion_main!(benches);
