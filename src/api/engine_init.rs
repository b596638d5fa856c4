use std::io::Read;
use std::path::Path;

use tracing::{debug, error};

use crate::core::{RecordSet, load_records_from_path, load_records_from_reader};
use crate::error::ChartResult;
use crate::interaction::{HoverState, SelectionController};
use crate::render::Renderer;

use super::scale_coordinator::initial_axis_state;
use super::{RenderStyle, ScatterChart, ScatterChartConfig};

impl<R: Renderer> ScatterChart<R> {
    /// Creates a chart over already loaded records.
    pub fn new(renderer: R, config: ScatterChartConfig, records: RecordSet) -> ChartResult<Self> {
        let plot = config.validate()?;
        let selection = config.initial_selection;
        let x_axis = initial_axis_state(&records, selection.x(), plot, config.padding)?;
        let y_axis = initial_axis_state(&records, selection.y(), plot, config.padding)?;
        debug!(
            records = records.len(),
            x = %selection.x(),
            y = %selection.y(),
            chart_width = plot.width,
            chart_height = plot.height,
            "scatter chart initialized"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            plot,
            records,
            controller: SelectionController::new(selection),
            x_axis,
            y_axis,
            hover: HoverState::default(),
            clock_ms: 0.0,
            plugins: Vec::new(),
        })
    }

    /// Loads records from a CSV file and creates the chart.
    pub fn from_csv_path(
        renderer: R,
        config: ScatterChartConfig,
        path: impl AsRef<Path>,
    ) -> ChartResult<Self> {
        config.validate()?;
        let records = load_records_from_path(path)?;
        Self::new(renderer, config, records)
    }

    pub fn from_csv_reader(
        renderer: R,
        config: ScatterChartConfig,
        reader: impl Read,
        source_name: &str,
    ) -> ChartResult<Self> {
        config.validate()?;
        let records = load_records_from_reader(reader, source_name)?;
        Self::new(renderer, config, records)
    }

    /// Top-level entry point for hosts: a load failure is logged and yields
    /// `None`, so nothing is drawn and the host keeps running.
    pub fn try_from_csv_path(
        renderer: R,
        config: ScatterChartConfig,
        path: impl AsRef<Path>,
    ) -> Option<Self> {
        let path = path.as_ref();
        match Self::from_csv_path(renderer, config, path) {
            Ok(chart) => Some(chart),
            Err(err) => {
                error!(path = %path.display(), error = %err, "chart not drawn");
                None
            }
        }
    }
}
