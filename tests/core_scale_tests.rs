use approx::assert_relative_eq;
use scatter_rs::core::{
    Field, LinearScale, ScalePadding, StateRecord, format_tick, nice_ticks,
};

fn record(abbr: &str, poverty: f64, healthcare: f64) -> StateRecord {
    StateRecord {
        state: abbr.to_owned(),
        abbr: abbr.to_owned(),
        poverty,
        age: 38.0,
        income: 50_000.0,
        healthcare,
        smokes: 18.0,
        obesity: 30.0,
    }
}

#[test]
fn field_scale_pads_extent_by_ten_percent() {
    let records = [record("AL", 19.3, 13.9), record("CT", 10.8, 6.6)];
    let scale = LinearScale::from_field(&records, Field::Poverty, (0.0, 820.0), ScalePadding::default())
        .expect("scale");

    let (low, high) = scale.domain();
    assert_relative_eq!(low, 0.9 * 10.8);
    assert_relative_eq!(high, 1.1 * 19.3);
    assert_eq!(scale.range(), (0.0, 820.0));
}

#[test]
fn x_scale_increases_and_y_scale_decreases() {
    let records = [record("AL", 19.3, 13.9), record("CT", 10.8, 6.6)];
    let x = LinearScale::from_field(&records, Field::Poverty, (0.0, 820.0), ScalePadding::default())
        .expect("x scale");
    let y = LinearScale::from_field(&records, Field::Healthcare, (390.0, 0.0), ScalePadding::default())
        .expect("y scale");

    assert!(x.map(12.0) < x.map(15.0));
    assert!(y.map(8.0) > y.map(12.0));
}

#[test]
fn map_and_invert_are_inverse() {
    let scale = LinearScale::new((5.31, 18.04), (390.0, 0.0)).expect("scale");
    let px = scale.map(11.1);
    assert_relative_eq!(scale.invert(px), 11.1, epsilon = 1e-9);
    assert_relative_eq!(scale.map(5.31), 390.0);
    assert_relative_eq!(scale.map(18.04), 0.0);
}

#[test]
fn degenerate_extent_falls_back_to_unit_interval() {
    let records = [record("AL", 0.0, 12.0), record("AK", 0.0, 12.0)];
    let poverty = LinearScale::from_field(&records, Field::Poverty, (0.0, 820.0), ScalePadding::default())
        .expect("zero extent");
    assert_eq!(poverty.domain(), (-0.5, 0.5));
    assert_relative_eq!(poverty.map(0.0), 410.0);

    // Non-zero single value still gets the padded domain.
    let healthcare =
        LinearScale::from_field(&records, Field::Healthcare, (390.0, 0.0), ScalePadding::default())
            .expect("single value");
    assert_relative_eq!(healthcare.domain().0, 10.8);
    assert_relative_eq!(healthcare.domain().1, 13.2);
}

#[test]
fn invalid_scale_inputs_are_rejected() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 10.0)).is_err());
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 10.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (5.0, 5.0)).is_err());
    assert!(
        LinearScale::from_field(&[], Field::Poverty, (0.0, 10.0), ScalePadding::default())
            .is_err()
    );
    let bad_padding = ScalePadding {
        lower: 1.2,
        upper: 1.1,
    };
    assert!(
        LinearScale::from_field(&[record("AL", 1.0, 1.0)], Field::Poverty, (0.0, 10.0), bad_padding)
            .is_err()
    );
}

#[test]
fn ticks_stay_inside_domain() {
    let scale = LinearScale::new((9.72, 21.23), (0.0, 820.0)).expect("scale");
    let ticks = scale.ticks(10);
    let expected: Vec<f64> = (10..=21).map(f64::from).collect();
    assert_eq!(ticks, expected);
    assert_eq!(scale.tick_precision(10), 0);

    let fine = nice_ticks(0.2, 0.9, 10);
    assert_eq!(fine.first().copied(), Some(0.2));
    assert_eq!(fine.last().copied(), Some(0.9));
}

#[test]
fn tick_labels_group_thousands() {
    assert_eq!(format_tick(42_830.0, 0), "42,830");
    assert_eq!(format_tick(1_234_567.5, 1), "1,234,567.5");
    assert_eq!(format_tick(-0.0, 0), "0");
    assert_eq!(format_tick(-1_500.0, 0), "-1,500");
    assert_eq!(format_tick(12.0, 0), "12");
}

#[test]
fn interpolation_blends_domain_and_clamps() {
    let from = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("from");
    let to = LinearScale::new((10.0, 30.0), (0.0, 100.0)).expect("to");
    assert_eq!(from.interpolate(to, 0.5).domain(), (5.0, 20.0));
    assert_eq!(from.interpolate(to, 2.0), to);
}
