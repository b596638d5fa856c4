use std::cell::RefCell;
use std::rc::Rc;

use scatter_rs::core::{Axis, AxisSelection, Field};
use scatter_rs::interaction::{SelectionChange, SelectionController};

fn active_count(controller: &SelectionController, axis: Axis) -> usize {
    controller
        .axis_labels(axis)
        .iter()
        .filter(|label| label.active)
        .count()
}

#[test]
fn default_selection_is_poverty_and_healthcare() {
    let controller = SelectionController::default();
    let selection = controller.selection();
    assert_eq!(selection.x(), Field::Poverty);
    assert_eq!(selection.y(), Field::Healthcare);
}

#[test]
fn clicking_active_label_is_a_no_op() {
    let mut controller = SelectionController::default();
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    controller.subscribe(move |_| *counter.borrow_mut() += 1);

    assert_eq!(controller.click_label(Field::Poverty), None);
    assert_eq!(controller.click_label(Field::Healthcare), None);
    assert_eq!(controller.selection(), AxisSelection::default());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn clicking_inactive_label_changes_only_its_axis() {
    let mut controller = SelectionController::default();
    let change = controller
        .click_label(Field::Income)
        .expect("income is inactive");

    assert_eq!(
        change,
        SelectionChange {
            axis: Axis::X,
            previous: Field::Poverty,
            current: Field::Income,
            selection: controller.selection(),
        }
    );
    assert_eq!(controller.selection().x(), Field::Income);
    assert_eq!(controller.selection().y(), Field::Healthcare);
    assert_eq!(active_count(&controller, Axis::X), 1);
    assert_eq!(active_count(&controller, Axis::Y), 1);
}

#[test]
fn label_emphasis_tracks_selection() {
    let mut controller = SelectionController::default();
    controller.click_label(Field::Smokes).expect("change y");

    let labels = controller.axis_labels(Axis::Y);
    let titles: Vec<(&str, bool)> = labels.iter().map(|l| (l.title, l.active)).collect();
    assert_eq!(
        titles,
        vec![
            ("Lacks Healthcare (%)", false),
            ("Smokes (%)", true),
            ("Obesity (%)", false),
        ]
    );
}

#[test]
fn subscribers_see_changes_in_order_until_unsubscribed() {
    let mut controller = SelectionController::default();
    let seen = Rc::new(RefCell::new(Vec::<Field>::new()));
    let sink = Rc::clone(&seen);
    let id = controller.subscribe(move |change| sink.borrow_mut().push(change.current));
    assert_eq!(controller.subscriber_count(), 1);

    controller.click_label(Field::Age);
    controller.click_label(Field::Obesity);
    controller.click_label(Field::Obesity);
    assert!(controller.unsubscribe(id));
    assert!(!controller.unsubscribe(id));
    controller.click_label(Field::Poverty);

    assert_eq!(*seen.borrow(), vec![Field::Age, Field::Obesity]);
    assert_eq!(controller.subscriber_count(), 0);
}

#[test]
fn selection_rejects_fields_on_the_wrong_axis() {
    assert!(AxisSelection::new(Field::Healthcare, Field::Poverty).is_err());
    assert!(AxisSelection::new(Field::Age, Field::Obesity).is_ok());
}

#[test]
fn fields_parse_from_column_names() {
    assert_eq!("Smokes".parse::<Field>().expect("parse"), Field::Smokes);
    assert!("weight".parse::<Field>().is_err());
}
