use std::path::PathBuf;

use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::Viewport;
use scatter_rs::render::{
    CirclePrimitive, Color, RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.csv")
}

#[test]
fn fixture_chart_renders_to_svg() {
    let mut chart = ScatterChart::from_csv_path(
        SvgRenderer::new(),
        ScatterChartConfig::default(),
        fixture_path(),
    )
    .expect("chart");
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"960\" height=\"500\""));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 10);
    assert!(svg.contains(">AL</text>"));
    assert!(svg.contains("fill=\"#89bdd3\""));
    assert!(svg.contains("stroke=\"#e3e3e3\""));
    assert!(svg.contains("font-weight=\"bold\">In Poverty (%)</text>"));
    assert!(svg.contains("transform=\"rotate(-90"));

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 10);
    assert_eq!(stats.rects_drawn, 0);
}

#[test]
fn hovered_marker_adds_translucent_tooltip_panel() {
    let mut chart = ScatterChart::from_csv_path(
        SvgRenderer::new(),
        ScatterChartConfig::default(),
        fixture_path(),
    )
    .expect("chart");
    let marker = chart.marker_position(0).expect("marker");
    let (x, y) = chart.plot_area().to_canvas(marker.x, marker.y);
    chart.pointer_move(x, y);
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.contains("fill=\"#000000\" fill-opacity=\"0.8\""));
    assert!(svg.contains(">Alabama</text>"));
    assert!(svg.contains(">Poverty: 19.3%</text>"));
    // Overlay is the last group, drawn above the markers.
    let overlay_start = svg.rfind("<g>").expect("overlay group");
    assert!(svg[overlay_start..].contains("Alabama"));
    assert!(!svg[overlay_start..].contains("<circle"));
}

#[test]
fn text_is_escaped_and_background_optional() {
    let mut renderer = SvgRenderer::new();
    renderer.set_background(None).expect("no background");
    let frame = RenderFrame::new(Viewport::new(100, 50))
        .with_circle(CirclePrimitive::new(10.0, 10.0, 4.0, Color::rgb(1.0, 0.0, 0.0)))
        .with_text(TextPrimitive::new(
            "A&B <C>",
            50.0,
            25.0,
            10.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Left,
        ));
    renderer.render(&frame).expect("render");

    let svg = renderer.document();
    assert!(svg.contains(">A&amp;B &lt;C&gt;</text>"));
    assert!(svg.contains("text-anchor=\"start\""));
    assert!(!svg.contains("<rect"));
    assert!(svg.contains("<circle cx=\"10\" cy=\"10\" r=\"4\" fill=\"#ff0000\"/>"));
}

#[test]
fn invalid_frames_and_unrendered_writes_fail() {
    let mut renderer = SvgRenderer::new();
    let out = std::env::temp_dir().join("scatter-rs-never-written.svg");
    assert!(renderer.write_to_path(&out).is_err());

    let bad = RenderFrame::new(Viewport::new(100, 50)).with_circle(CirclePrimitive::new(
        f64::NAN,
        0.0,
        4.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(renderer.render(&bad).is_err());
    assert!(renderer.document().is_empty());
    assert!(renderer.set_background(Some(Color::rgba(0.0, 0.0, 0.0, 2.0))).is_err());
}

#[test]
fn rendered_document_is_written_to_disk() {
    let mut chart = ScatterChart::from_csv_path(
        SvgRenderer::new(),
        ScatterChartConfig::basic(),
        fixture_path(),
    )
    .expect("chart");
    chart.render().expect("render");

    let out = std::env::temp_dir().join(format!("scatter-rs-{}.svg", std::process::id()));
    chart.renderer().write_to_path(&out).expect("write");
    let written = std::fs::read_to_string(&out).expect("read back");
    std::fs::remove_file(&out).expect("cleanup");
    assert_eq!(written, chart.renderer().document());
    // Basic charts only draw the two active titles.
    assert!(!written.contains("Smokes (%)"));
}
