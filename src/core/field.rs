use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::X => &X_FIELDS,
            Self::Y => &Y_FIELDS,
        }
    }
}

/// Numeric observation of a record that can be plotted on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Field {
    Poverty = 0,
    Age = 1,
    Income = 2,
    Healthcare = 3,
    Smokes = 4,
    Obesity = 5,
}

const X_FIELDS: [Field; 3] = [Field::Poverty, Field::Age, Field::Income];
const Y_FIELDS: [Field; 3] = [Field::Healthcare, Field::Smokes, Field::Obesity];

/// Static presentation metadata of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub axis: Axis,
    /// CSV column holding the field.
    pub column: &'static str,
    /// Prefix shown in the tooltip line, e.g. `Poverty:`.
    pub tooltip_label: &'static str,
    /// Clickable title drawn next to the axis.
    pub axis_title: &'static str,
    pub percent: bool,
}

const FIELD_SPECS: [FieldSpec; 6] = [
    FieldSpec {
        field: Field::Poverty,
        axis: Axis::X,
        column: "poverty",
        tooltip_label: "Poverty:",
        axis_title: "In Poverty (%)",
        percent: true,
    },
    FieldSpec {
        field: Field::Age,
        axis: Axis::X,
        column: "age",
        tooltip_label: "Age:",
        axis_title: "Age (Median)",
        percent: false,
    },
    FieldSpec {
        field: Field::Income,
        axis: Axis::X,
        column: "income",
        tooltip_label: "Income:",
        axis_title: "Household Income (Median)",
        percent: false,
    },
    FieldSpec {
        field: Field::Healthcare,
        axis: Axis::Y,
        column: "healthcare",
        tooltip_label: "HealthCare:",
        axis_title: "Lacks Healthcare (%)",
        percent: true,
    },
    FieldSpec {
        field: Field::Smokes,
        axis: Axis::Y,
        column: "smokes",
        tooltip_label: "Smokes:",
        axis_title: "Smokes (%)",
        percent: true,
    },
    FieldSpec {
        field: Field::Obesity,
        axis: Axis::Y,
        column: "obesity",
        tooltip_label: "Obesity:",
        axis_title: "Obesity (%)",
        percent: true,
    },
];

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Poverty,
        Field::Age,
        Field::Income,
        Field::Healthcare,
        Field::Smokes,
        Field::Obesity,
    ];

    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        self.spec().axis
    }

    #[must_use]
    pub fn column(self) -> &'static str {
        self.spec().column
    }

    #[must_use]
    pub fn tooltip_label(self) -> &'static str {
        self.spec().tooltip_label
    }

    #[must_use]
    pub fn axis_title(self) -> &'static str {
        self.spec().axis_title
    }

    #[must_use]
    pub fn percent_suffix(self) -> &'static str {
        if self.spec().percent { "%" } else { "" }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.column() == normalized)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown field `{value}`")))
    }
}

/// Pair of fields currently plotted on the x and y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    x: Field,
    y: Field,
}

impl AxisSelection {
    pub fn new(x: Field, y: Field) -> ChartResult<Self> {
        if x.axis() != Axis::X {
            return Err(ChartError::InvalidData(format!(
                "field `{x}` cannot be plotted on the x axis"
            )));
        }
        if y.axis() != Axis::Y {
            return Err(ChartError::InvalidData(format!(
                "field `{y}` cannot be plotted on the y axis"
            )));
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(self) -> Field {
        self.x
    }

    #[must_use]
    pub fn y(self) -> Field {
        self.y
    }

    #[must_use]
    pub fn field(self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns a copy with `field` active on its own axis.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        match field.axis() {
            Axis::X => self.x = field,
            Axis::Y => self.y = field,
        }
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        Self::new(self.x, self.y)
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            x: Field::Poverty,
            y: Field::Healthcare,
        }
    }
}
