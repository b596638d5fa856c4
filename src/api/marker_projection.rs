use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Axis, Field, LinearScale, StateRecord};
use crate::render::Renderer;

use super::ScatterChart;

/// On-screen marker centre and label anchor in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub record_index: usize,
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// Pixel coordinate of `field` for every record, in record order.
pub(super) fn project_field(
    records: &[StateRecord],
    field: Field,
    scale: LinearScale,
) -> Vec<f64> {
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .map(|record| scale.map(record.value(field)))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .map(|record| scale.map(record.value(field)))
            .collect()
    }
}

impl<R: Renderer> ScatterChart<R> {
    /// Marker of `record_index` as currently shown, mid-transition included.
    #[must_use]
    pub fn marker_position(&self, record_index: usize) -> Option<MarkerPosition> {
        let x = self.x_axis.position_at(record_index, self.clock_ms)?;
        let y = self.y_axis.position_at(record_index, self.clock_ms)?;
        Some(MarkerPosition {
            record_index,
            x,
            y,
            label_x: x,
            label_y: y + self.config.marker_label_offset_px,
        })
    }

    /// Every marker as currently shown, in record order.
    #[must_use]
    pub fn marker_positions(&self) -> Vec<MarkerPosition> {
        (0..self.records.len())
            .filter_map(|index| self.marker_position(index))
            .collect()
    }

    /// Where the marker of `record_index` settles once transitions finish.
    #[must_use]
    pub fn marker_target(&self, record_index: usize) -> Option<(f64, f64)> {
        Some((
            self.axis_state(Axis::X).target_position(record_index)?,
            self.axis_state(Axis::Y).target_position(record_index)?,
        ))
    }
}
