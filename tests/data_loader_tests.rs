use std::path::PathBuf;

use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{Field, load_records_from_path, load_records_from_reader};
use scatter_rs::render::NullRenderer;

const HEADER: &str = "state,abbr,poverty,age,income,healthcare,smokes,obesity";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.csv")
}

#[test]
fn fixture_loads_every_row_in_file_order() {
    let records = load_records_from_path(fixture_path()).expect("fixture should load");

    assert_eq!(records.len(), 10);
    let alabama = &records[0];
    assert_eq!(alabama.state, "Alabama");
    assert_eq!(alabama.abbr, "AL");
    assert_eq!(alabama.poverty, 19.3);
    assert_eq!(alabama.age, 38.6);
    assert_eq!(alabama.income, 42_830.0);
    assert_eq!(alabama.healthcare, 13.9);
    assert_eq!(alabama.smokes, 21.1);
    assert_eq!(alabama.obesity, 33.5);

    assert_eq!(records.position_of_abbr("DC"), Some(8));
    assert_eq!(records[8].state, "District of Columbia");
    assert_eq!(records.extent(Field::Poverty), (10.8, 19.3));
}

#[test]
fn missing_file_is_a_data_load_failure() {
    let err = load_records_from_path("tests/fixtures/does-not-exist.csv")
        .expect_err("missing file must fail");
    assert!(err.is_data_load());
    assert!(err.to_string().contains("does-not-exist.csv"));
}

#[test]
fn missing_required_column_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes\nAlabama,AL,19.3,38.6,42830,13.9,21.1\n";
    let err = load_records_from_reader(csv.as_bytes(), "inline").expect_err("must fail");
    assert!(err.is_data_load());
    assert!(err.to_string().contains("obesity"));
}

#[test]
fn malformed_number_is_rejected_with_its_line() {
    let csv = format!(
        "{HEADER}\nAlabama,AL,19.3,38.6,42830,13.9,21.1,33.5\nAlaska,AK,n/a,33.3,71583,15,19.9,29.7\n"
    );
    let err = load_records_from_reader(csv.as_bytes(), "inline").expect_err("must fail");
    assert!(err.is_data_load());
    assert!(err.to_string().contains("line 3"), "{err}");
}

#[test]
fn negative_value_is_rejected() {
    let csv = format!("{HEADER}\nAlabama,AL,-1,38.6,42830,13.9,21.1,33.5\n");
    let err = load_records_from_reader(csv.as_bytes(), "inline").expect_err("must fail");
    assert!(err.is_data_load());
}

#[test]
fn header_only_file_is_rejected() {
    let csv = format!("{HEADER}\n");
    let err = load_records_from_reader(csv.as_bytes(), "inline").expect_err("must fail");
    assert!(err.is_data_load());
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let csv = format!("{HEADER}\n Alabama , AL , 19.3 ,38.6,42830,13.9,21.1,33.5\n");
    let records = load_records_from_reader(csv.as_bytes(), "inline").expect("load");
    assert_eq!(records[0].abbr, "AL");
    assert_eq!(records[0].poverty, 19.3);
}

#[test]
fn failed_load_draws_nothing() {
    let chart = ScatterChart::try_from_csv_path(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        "tests/fixtures/does-not-exist.csv",
    );
    assert!(chart.is_none());
}

#[test]
fn chart_loads_from_fixture() {
    let chart = ScatterChart::from_csv_path(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        fixture_path(),
    )
    .expect("chart should load");
    assert_eq!(chart.records().len(), 10);
    assert_eq!(chart.marker_positions().len(), 10);
}
