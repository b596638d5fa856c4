use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::ScatterChart;
use crate::interaction::HoverChange;
use crate::render::{CairoContextRenderer, Renderer};

/// Embeds a [`ScatterChart`] into a GTK4 `DrawingArea`.
///
/// Clicks switch axis titles, pointer motion drives the tooltip and the
/// widget's frame clock drives axis transitions.
pub struct GtkScatterAdapter<R: Renderer + CairoContextRenderer + 'static> {
    chart: Rc<RefCell<ScatterChart<R>>>,
    area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkScatterAdapter<R> {
    #[must_use]
    pub fn new(chart: ScatterChart<R>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_, context, _, _| {
            if let Err(err) = draw_chart.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "gtk draw pass failed");
            }
        });

        let click = gtk::GestureClick::new();
        let click_chart = Rc::clone(&chart);
        let click_area = area.clone();
        click.connect_pressed(move |_, _, x, y| {
            match click_chart.borrow_mut().pointer_click(x, y) {
                Ok(Some(_)) => click_area.queue_draw(),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "axis title click rejected"),
            }
        });
        area.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        let motion_chart = Rc::clone(&chart);
        let motion_area = area.clone();
        motion.connect_motion(move |_, x, y| {
            if motion_chart.borrow_mut().pointer_move(x, y) != HoverChange::Unchanged {
                motion_area.queue_draw();
            }
        });
        let leave_chart = Rc::clone(&chart);
        let leave_area = area.clone();
        motion.connect_leave(move |_| {
            if leave_chart.borrow_mut().pointer_leave() != HoverChange::Unchanged {
                leave_area.queue_draw();
            }
        });
        area.add_controller(motion);

        let tick_chart = Rc::clone(&chart);
        let origin_us = Cell::new(None::<i64>);
        area.add_tick_callback(move |widget, clock| {
            let frame_us = clock.frame_time();
            let origin = origin_us.get().unwrap_or(frame_us);
            origin_us.set(Some(origin));
            let mut chart = tick_chart.borrow_mut();
            let was_animating = chart.is_animating();
            let now_ms = (frame_us - origin) as f64 / 1_000.0;
            if let Err(err) = chart.set_time(now_ms) {
                warn!(error = %err, "frame clock update rejected");
            }
            if was_animating {
                widget.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        Self { chart, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Shared handle to the chart for host-side queries and subscriptions.
    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<ScatterChart<R>>> {
        Rc::clone(&self.chart)
    }
}
