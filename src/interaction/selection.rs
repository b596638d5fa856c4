use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Axis, AxisSelection, Field};

/// Handle returned by [`SelectionController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

/// One accepted axis reselection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub axis: Axis,
    pub previous: Field,
    pub current: Field,
    /// Full selection after the change.
    pub selection: AxisSelection,
}

/// Title of one field with its computed emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabelState {
    pub field: Field,
    pub title: &'static str,
    pub active: bool,
}

pub type SelectionCallback = Box<dyn FnMut(&SelectionChange)>;

/// Owner of the single mutable piece of chart state: which field each axis plots.
///
/// The controller knows nothing about scales or drawing. Hosts learn about
/// accepted changes from the return value of [`click_label`](Self::click_label)
/// or by subscribing a callback.
pub struct SelectionController {
    selection: AxisSelection,
    subscribers: IndexMap<SubscriptionId, SelectionCallback>,
    next_subscription: u64,
}

impl SelectionController {
    #[must_use]
    pub fn new(initial: AxisSelection) -> Self {
        Self {
            selection: initial,
            subscribers: IndexMap::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn active_field(&self, axis: Axis) -> Field {
        self.selection.field(axis)
    }

    /// Handles a click on the title of `field`.
    ///
    /// Returns `None` when `field` is already active on its axis; nothing is
    /// mutated and no subscriber runs in that case.
    pub fn click_label(&mut self, field: Field) -> Option<SelectionChange> {
        let axis = field.axis();
        let previous = self.selection.field(axis);
        if previous == field {
            trace!(%field, "click on active label ignored");
            return None;
        }

        self.selection = self.selection.with_field(field);
        let change = SelectionChange {
            axis,
            previous,
            current: field,
            selection: self.selection,
        };
        debug!(?axis, %previous, current = %field, "axis selection changed");
        for callback in self.subscribers.values_mut() {
            callback(&change);
        }
        Some(change)
    }

    /// Every title of `axis` with exactly one flagged active.
    #[must_use]
    pub fn axis_labels(&self, axis: Axis) -> SmallVec<[AxisLabelState; 3]> {
        axis_labels_for(self.selection, axis)
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&SelectionChange) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Removes a subscription. Returns `true` when it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(AxisSelection::default())
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

pub(crate) fn axis_labels_for(
    selection: AxisSelection,
    axis: Axis,
) -> SmallVec<[AxisLabelState; 3]> {
    let active = selection.field(axis);
    axis.fields()
        .iter()
        .map(|&field| AxisLabelState {
            field,
            title: field.axis_title(),
            active: field == active,
        })
        .collect()
}
