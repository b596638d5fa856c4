use std::cell::RefCell;
use std::rc::Rc;

use scatter_rs::ChartError;
use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{Axis, Field, RecordSet, StateRecord};
use scatter_rs::extensions::{ChartEvent, ChartPlugin, PluginContext};
use scatter_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::SelectionChanged(_) => "selection",
        ChartEvent::TooltipShown { .. } => "tooltip_shown",
        ChartEvent::TooltipHidden { .. } => "tooltip_hidden",
        ChartEvent::TransitionSettled { .. } => "settled",
        ChartEvent::Rendered => "rendered",
    }
}

fn chart() -> ScatterChart<NullRenderer> {
    let records = RecordSet::new(vec![StateRecord {
        state: "Alabama".to_owned(),
        abbr: "AL".to_owned(),
        poverty: 20.1,
        age: 38.6,
        income: 42_830.0,
        healthcare: 11.1,
        smokes: 15.0,
        obesity: 33.5,
    }])
    .expect("records");
    ScatterChart::new(NullRenderer::default(), ScatterChartConfig::default(), records)
        .expect("chart init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.click_label(Field::Smokes).expect("click");
    chart.click_label(Field::Smokes).expect("repeat click");
    chart.advance_time(400.0).expect("advance");
    chart.advance_time(600.0).expect("advance");

    let marker = chart.marker_position(0).expect("marker");
    let (x, y) = chart.plot_area().to_canvas(marker.x, marker.y);
    chart.pointer_move(x, y);
    chart.render().expect("render");
    chart.pointer_leave();

    let recorded = events.borrow();
    let kinds: Vec<&str> = recorded.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec!["selection", "settled", "tooltip_shown", "rendered", "tooltip_hidden"]
    );
    assert_eq!(
        recorded[1].0,
        ChartEvent::TransitionSettled { axis: Axis::Y }
    );

    let (_, context) = recorded[0];
    assert_eq!(context.selection.y(), Field::Smokes);
    assert_eq!(context.records_len, 1);
    assert_eq!(context.y_domain, chart.scale(Axis::Y).domain());
    assert_eq!(recorded[3].1.hovered, Some(0));
    assert_eq!(recorded[1].1.clock_ms, 1_000.0);
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));

    chart
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("first registration");
    let duplicate = chart.register_plugin(Box::new(RecordingPlugin::new("a", events.clone())));
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));
    let empty = chart.register_plugin(Box::new(RecordingPlugin::new("", events.clone())));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.has_plugin("a"));
    assert!(chart.unregister_plugin("a"));
    assert!(!chart.unregister_plugin("a"));

    chart.render().expect("render");
    assert!(events.borrow().is_empty());
}

#[test]
fn selection_subscribers_and_plugins_both_observe_clicks() {
    let mut chart = chart();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = chart.subscribe(move |change| sink.borrow_mut().push(change.current));
    assert_eq!(chart.subscriber_count(), 1);

    chart.click_label(Field::Income).expect("click");
    chart.click_label(Field::Income).expect("repeat");
    assert_eq!(*seen.borrow(), vec![Field::Income]);

    assert!(chart.unsubscribe(id));
    assert!(!chart.unsubscribe(id));
    chart.click_label(Field::Age).expect("click after unsubscribe");
    assert_eq!(*seen.borrow(), vec![Field::Income]);
}

#[test]
fn subscribed_click_rebuilds_the_scale_of_the_clicked_axis() {
    let mut chart = chart();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    chart.subscribe(move |change| sink.borrow_mut().push((change.axis, change.current)));

    chart.click_label(Field::Smokes).expect("click");
    assert_eq!(*seen.borrow(), vec![(Axis::Y, Field::Smokes)]);
    assert_eq!(chart.selection().y(), Field::Smokes);

    let (min, max) = chart.records().extent(Field::Smokes);
    let (lo, hi) = chart.scale(Axis::Y).domain();
    assert!((lo - 0.9 * min).abs() < 1e-9);
    assert!((hi - 1.1 * max).abs() < 1e-9);
}
