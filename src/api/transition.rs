use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axis, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Slow start and end, fastest at the midpoint.
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let x = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::CubicInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Durations and easing of the animated rescale after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    /// Tick marks and tick labels.
    pub axis_duration_ms: f64,
    /// Markers and their labels.
    pub marker_duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            axis_duration_ms: 800.0,
            marker_duration_ms: 1000.0,
            easing: Easing::CubicInOut,
        }
    }
}

impl TransitionTiming {
    /// Timing that jumps straight to the target state.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            axis_duration_ms: 0.0,
            marker_duration_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("axis_duration_ms", self.axis_duration_ms),
            ("marker_duration_ms", self.marker_duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "transition `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AxisTransition {
    started_at_ms: f64,
    timing: TransitionTiming,
    from_scale: LinearScale,
    from_positions: Vec<f64>,
}

impl AxisTransition {
    fn progress(&self, now_ms: f64, duration_ms: f64) -> f64 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.started_at_ms) / duration_ms;
        self.timing.easing.apply(t)
    }

    fn is_finished(&self, now_ms: f64) -> bool {
        let longest = self
            .timing
            .axis_duration_ms
            .max(self.timing.marker_duration_ms);
        now_ms - self.started_at_ms >= longest
    }
}

/// Scale and marker coordinates of one axis, with the in-flight animation.
///
/// `scale` and `positions` always hold the authoritative target. While a
/// transition runs, on-screen values are blended from the state captured when
/// it started.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisState {
    axis: Axis,
    scale: LinearScale,
    positions: Vec<f64>,
    transition: Option<AxisTransition>,
}

impl AxisState {
    pub(crate) fn new(axis: Axis, scale: LinearScale, positions: Vec<f64>) -> Self {
        Self {
            axis,
            scale,
            positions,
            transition: None,
        }
    }

    pub(crate) fn target_scale(&self) -> LinearScale {
        self.scale
    }

    pub(crate) fn target_position(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    /// Starts animating towards a new target.
    ///
    /// An in-flight transition is superseded: the new one starts from what is
    /// on screen at `now_ms`, so markers never jump.
    pub(crate) fn retarget(
        &mut self,
        scale: LinearScale,
        positions: Vec<f64>,
        now_ms: f64,
        timing: TransitionTiming,
    ) {
        let from_scale = self.scale_at(now_ms);
        let from_positions = self.positions_at(now_ms);
        trace!(
            axis = ?self.axis,
            now_ms,
            superseded = self.transition.is_some(),
            "axis transition started"
        );
        self.scale = scale;
        self.positions = positions;
        self.transition = Some(AxisTransition {
            started_at_ms: now_ms,
            timing,
            from_scale,
            from_positions,
        });
        // Zero-length timing settles on the spot.
        self.settle(now_ms);
    }

    /// Scale used for tick marks at `now_ms`.
    pub(crate) fn scale_at(&self, now_ms: f64) -> LinearScale {
        match &self.transition {
            Some(transition) => {
                let t = transition.progress(now_ms, transition.timing.axis_duration_ms);
                if t >= 1.0 {
                    return self.scale;
                }
                transition.from_scale.interpolate(self.scale, t)
            }
            None => self.scale,
        }
    }

    pub(crate) fn position_at(&self, index: usize, now_ms: f64) -> Option<f64> {
        let target = self.positions.get(index).copied()?;
        match &self.transition {
            Some(transition) => {
                let from = transition
                    .from_positions
                    .get(index)
                    .copied()
                    .unwrap_or(target);
                let t = transition.progress(now_ms, transition.timing.marker_duration_ms);
                if t >= 1.0 {
                    return Some(target);
                }
                Some(from + (target - from) * t)
            }
            None => Some(target),
        }
    }

    pub(crate) fn positions_at(&self, now_ms: f64) -> Vec<f64> {
        (0..self.positions.len())
            .filter_map(|index| self.position_at(index, now_ms))
            .collect()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Drops a finished transition. Returns `true` when one settled.
    pub(crate) fn settle(&mut self, now_ms: f64) -> bool {
        match &self.transition {
            Some(transition) if transition.is_finished(now_ms) => {
                self.transition = None;
                true
            }
            _ => false,
        }
    }
}
