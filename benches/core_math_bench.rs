use quadrant_chart::api::{ChartOptionsBuilder, SceneBuilder, build_points};
use quadrant_chart::core::{AxisSelection, ChartSize, FieldValue, Quadrant, Record};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_classify_grid(c: &mut Criterion) {
    c.bench_function("classify_51x51_grid", |b| {
        b.iter(|| {
            let mut high_high = 0usize;
            for x in 0..=50 {
                for y in 0..=50 {
                    if Quadrant::classify(black_box(f64::from(x)), black_box(f64::from(y)))
                        == Quadrant::HighHigh
                    {
                        high_high += 1;
                    }
                }
            }
            high_high
        })
    });
}

fn bench_points_and_scene_5k(c: &mut Criterion) {
    let axes = AxisSelection::new("Resolvability", "Opportunity").expect("valid axes");
    let records: Vec<Record> = (0..5_000)
        .map(|i| {
            let x = (i * 7 % 51) as f64;
            let y = (i * 13 % 51) as f64;
            Record::new(i)
                .with_title(format!("Issue {i}"))
                .with_field("Resolvability", FieldValue::Text(x.to_string()))
                .with_field("Opportunity", FieldValue::Number(y))
        })
        .collect();
    let options = ChartOptionsBuilder::new(&axes)
        .size(ChartSize::new(10).expect("valid size"))
        .overlay(Some(Default::default()))
        .build();

    c.bench_function("points_and_scene_5k", |b| {
        b.iter(|| {
            let points = build_points(black_box(&records), &axes);
            let _ = SceneBuilder::new(&options)
                .build(&points)
                .expect("scene build");
        })
    });
}

criterion_group!(benches, bench_classify_grid, bench_points_and_scene_5k);
criterion_main!(benches);
