use tracing::debug;

use crate::core::{Axis, Field, LinearScale, PlotArea, RecordSet, ScalePadding};
use crate::error::ChartResult;

use super::marker_projection::project_field;
use super::transition::AxisState;

/// Pixel range an axis maps onto: left to right for x, bottom to top for y.
pub(super) fn axis_range(plot: PlotArea, axis: Axis) -> (f64, f64) {
    match axis {
        Axis::X => plot.x_range(),
        Axis::Y => plot.y_range(),
    }
}

/// Fits a fresh scale for `field` and projects every record onto it.
pub(super) fn fit_axis(
    records: &RecordSet,
    field: Field,
    plot: PlotArea,
    padding: ScalePadding,
) -> ChartResult<(LinearScale, Vec<f64>)> {
    let axis = field.axis();
    let range = axis_range(plot, axis);
    let scale = LinearScale::from_field(records.as_slice(), field, range, padding)?;
    let positions = project_field(records.as_slice(), field, scale);
    debug!(
        ?axis,
        %field,
        domain = ?scale.domain(),
        range = ?scale.range(),
        "fitted axis scale"
    );
    Ok((scale, positions))
}

pub(super) fn initial_axis_state(
    records: &RecordSet,
    field: Field,
    plot: PlotArea,
    padding: ScalePadding,
) -> ChartResult<AxisState> {
    let (scale, positions) = fit_axis(records, field, plot, padding)?;
    Ok(AxisState::new(field.axis(), scale, positions))
}
