use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::api::{ScatterChart, ScatterChartConfig, TransitionTiming};
use scatter_rs::core::{Field, LinearScale, RecordSet, ScalePadding, StateRecord};
use scatter_rs::render::NullRenderer;
use std::hint::black_box;

fn generated_records(count: usize) -> RecordSet {
    let records = (0..count)
        .map(|i| {
            let t = i as f64;
            StateRecord {
                state: format!("State {i}"),
                abbr: format!("S{i}"),
                poverty: 8.0 + (t * 0.37) % 14.0,
                age: 30.0 + (t * 0.11) % 15.0,
                income: 35_000.0 + (t * 97.0) % 40_000.0,
                healthcare: 4.0 + (t * 0.23) % 20.0,
                smokes: 9.0 + (t * 0.19) % 18.0,
                obesity: 20.0 + (t * 0.29) % 17.0,
            }
        })
        .collect();
    RecordSet::new(records).expect("valid generated records")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((7.56, 24.31), (0.0, 820.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(17.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_scale_from_field_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("scale_from_field_10k", |b| {
        b.iter(|| {
            let _ = LinearScale::from_field(
                black_box(records.as_slice()),
                black_box(Field::Income),
                (0.0, 820.0),
                ScalePadding::default(),
            )
            .expect("scale should fit");
        })
    });
}

fn bench_render_frame_mid_transition_2k(c: &mut Criterion) {
    let config = ScatterChartConfig::default().with_timing(TransitionTiming::default());
    let mut chart = ScatterChart::new(NullRenderer::default(), config, generated_records(2_000))
        .expect("chart init");
    chart.click_label(Field::Age).expect("switch x");
    chart.advance_time(400.0).expect("advance");

    c.bench_function("render_frame_mid_transition_2k", |b| {
        b.iter(|| {
            let _ = chart
                .build_render_frame()
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_scale_from_field_10k,
    bench_render_frame_mid_transition_2k
);
criterion_main!(benches);
