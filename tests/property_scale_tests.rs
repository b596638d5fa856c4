use proptest::prelude::*;
use scatter_rs::core::{Field, LinearScale, ScalePadding, StateRecord};

fn record(poverty: f64, healthcare: f64) -> StateRecord {
    StateRecord {
        state: "State".to_owned(),
        abbr: "ST".to_owned(),
        poverty,
        age: 40.0,
        income: 50_000.0,
        healthcare,
        smokes: 15.0,
        obesity: 25.0,
    }
}

proptest! {
    #[test]
    fn padded_domain_property(
        values in prop::collection::vec((0.1f64..1_000.0, 0.1f64..1_000.0), 1..64)
    ) {
        let records: Vec<StateRecord> = values.iter().map(|&(p, h)| record(p, h)).collect();
        let min = values.iter().map(|v| v.0).fold(f64::INFINITY, f64::min);
        let max = values.iter().map(|v| v.0).fold(f64::NEG_INFINITY, f64::max);

        let scale = LinearScale::from_field(&records, Field::Poverty, (0.0, 820.0), ScalePadding::default())
            .expect("valid scale");
        let (low, high) = scale.domain();

        prop_assert!((low - 0.9 * min).abs() <= 1e-9 * min.max(1.0));
        prop_assert!((high - 1.1 * max).abs() <= 1e-9 * max.max(1.0));
        for r in &records {
            let px = scale.map(r.poverty);
            prop_assert!((0.0..=820.0).contains(&px));
        }
    }

    #[test]
    fn y_scale_is_decreasing_and_invertible(
        low in 0.1f64..1_000.0,
        span in 0.01f64..1_000.0,
        a_factor in 0.0f64..1.0,
        b_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::new((low, low + span), (390.0, 0.0)).expect("valid scale");
        let a = low + a_factor * span;
        let b = low + b_factor * span;

        if a < b {
            prop_assert!(scale.map(a) >= scale.map(b));
        }
        let recovered = scale.invert(scale.map(a));
        prop_assert!((recovered - a).abs() <= 1e-7 * a.max(1.0));
    }
}
