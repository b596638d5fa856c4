use scatter_rs::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ScatterChart, ScatterChartConfig,
};
use scatter_rs::core::{Axis, Field, RecordSet, StateRecord, load_records_from_reader};
use scatter_rs::render::NullRenderer;

const CSV: &str = "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5\n\
Alaska,AK,11.2,33.3,71583,15,19.9,29.7\n\
Arizona,AZ,18.2,36.9,50068,14.4,16.5,28.9\n";

fn chart() -> ScatterChart<NullRenderer> {
    let records = load_records_from_reader(CSV.as_bytes(), "inline").expect("records");
    ScatterChart::new(NullRenderer::default(), ScatterChartConfig::default(), records)
        .expect("chart")
}

#[test]
fn snapshot_describes_visible_state() {
    let mut chart = chart();
    chart.click_label(Field::Obesity).expect("click");
    chart.advance_time(250.0).expect("advance");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.selection.y(), Field::Obesity);
    assert_eq!(snapshot.y_domain, chart.scale(Axis::Y).domain());
    assert_eq!(snapshot.clock_ms, 250.0);
    assert!(snapshot.animating);
    assert_eq!(snapshot.hovered, None);
    assert_eq!(snapshot.markers.len(), 3);
    assert_eq!(snapshot.markers[1], chart.marker_position(1).expect("marker"));

    let active: Vec<&str> = snapshot
        .axis_titles
        .iter()
        .filter(|(_, active)| **active)
        .map(|(field, _)| field.as_str())
        .collect();
    assert_eq!(active, vec!["poverty", "obesity"]);
    assert_eq!(snapshot.axis_titles.len(), 6);
}

#[test]
fn snapshot_contract_round_trips() {
    let chart = chart();
    let json = chart.snapshot_json_contract_v1_pretty().expect("contract json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], CHART_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, chart.snapshot());

    let bare = chart.snapshot_json_pretty().expect("bare json");
    let parsed_bare = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, parsed);
}

fn many_records(count: usize) -> RecordSet {
    let records = (0..count)
        .map(|i| {
            let t = i as f64;
            StateRecord {
                state: format!("State {i}"),
                abbr: format!("S{i}"),
                poverty: 9.3 + (t * 0.731) % 12.0,
                age: 30.7 + (t * 0.173) % 9.0,
                income: 39_137.0 + (t * 911.3) % 35_000.0,
                healthcare: 4.1 + (t * 0.377) % 20.0,
                smokes: 9.7 + (t * 0.291) % 17.0,
                obesity: 21.3 + (t * 0.197) % 14.0,
            }
        })
        .collect();
    RecordSet::new(records).expect("records")
}

#[test]
fn snapshot_contract_round_trips_mid_transition() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        many_records(52),
    )
    .expect("chart");
    chart.click_label(Field::Income).expect("click");
    chart.click_label(Field::Smokes).expect("click");
    chart.advance_time(333.0).expect("advance");
    assert!(chart.is_animating());

    let snapshot = chart.snapshot();
    let json = chart.snapshot_json_contract_v1_pretty().expect("contract json");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed.markers.len(), 52);
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let chart = chart();
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("contract json")
        .replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);
    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
    assert!(ChartSnapshot::from_json_compat_str("[]").is_err());
}
