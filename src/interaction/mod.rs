mod selection;

use serde::{Deserialize, Serialize};

pub use selection::{
    AxisLabelState, SelectionCallback, SelectionChange, SelectionController, SubscriptionId,
};

pub(crate) use selection::axis_labels_for;

use crate::core::Field;

/// Chart element found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    Marker(usize),
    MarkerLabel(usize),
    AxisTitle(Field),
}

impl PointerTarget {
    /// Record whose tooltip this target shows, if any.
    #[must_use]
    pub fn record_index(self) -> Option<usize> {
        match self {
            Self::Marker(index) | Self::MarkerLabel(index) => Some(index),
            Self::AxisTitle(_) => None,
        }
    }
}

/// Outcome of feeding a new hover candidate into [`HoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Left(usize),
    Moved { from: usize, to: usize },
}

/// Which record, if any, currently shows its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    pub fn update(&mut self, candidate: Option<usize>) -> HoverChange {
        let change = match (self.hovered, candidate) {
            (None, None) => HoverChange::Unchanged,
            (Some(from), Some(to)) if from == to => HoverChange::Unchanged,
            (None, Some(to)) => HoverChange::Entered(to),
            (Some(from), None) => HoverChange::Left(from),
            (Some(from), Some(to)) => HoverChange::Moved { from, to },
        };
        self.hovered = candidate;
        change
    }

    pub fn clear(&mut self) -> HoverChange {
        self.update(None)
    }
}
