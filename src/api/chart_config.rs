use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, Margins, PlotArea, ScalePadding, Viewport};
use crate::error::{ChartError, ChartResult};

use super::TransitionTiming;

/// Which axis titles are drawn and whether they react to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisTitleMode {
    /// Every field title of both axes; clicking one reselects the axis.
    #[default]
    AllFields,
    /// Only the initially selected field per axis; clicks are ignored.
    ActiveOnly,
}

/// Tooltip panel shift relative to its default spot centred above the marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self {
            dx: -80.0,
            dy: 50.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    /// Vertical shift of a marker label below the marker centre.
    #[serde(default = "default_marker_label_offset_px")]
    pub marker_label_offset_px: f64,
    #[serde(default)]
    pub padding: ScalePadding,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub timing: TransitionTiming,
    #[serde(default)]
    pub initial_selection: AxisSelection,
    #[serde(default)]
    pub title_mode: AxisTitleMode,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
}

fn default_marker_radius_px() -> f64 {
    12.0
}

fn default_marker_label_offset_px() -> f64 {
    3.0
}

fn default_tick_count() -> usize {
    10
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::interactive(),
            marker_radius_px: default_marker_radius_px(),
            marker_label_offset_px: default_marker_label_offset_px(),
            padding: ScalePadding::default(),
            tick_count: default_tick_count(),
            timing: TransitionTiming::default(),
            initial_selection: AxisSelection::default(),
            title_mode: AxisTitleMode::AllFields,
            tooltip_offset: TooltipOffset::default(),
        }
    }
}

impl ScatterChartConfig {
    /// Static poverty/healthcare chart with one title per axis.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            margins: Margins::basic(),
            title_mode: AxisTitleMode::ActiveOnly,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_initial_selection(mut self, selection: AxisSelection) -> Self {
        self.initial_selection = selection;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_title_mode(mut self, title_mode: AxisTitleMode) -> Self {
        self.title_mode = title_mode;
        self
    }

    /// Checks every field and returns the derived plot area.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_label_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "marker label offset must be finite".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        if !self.tooltip_offset.dx.is_finite() || !self.tooltip_offset.dy.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        self.padding.validate()?;
        self.timing.validate()?;
        self.initial_selection.validate()?;
        Ok(plot)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Parses a config; absent keys take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
