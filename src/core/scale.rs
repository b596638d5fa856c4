use serde::{Deserialize, Serialize};

use crate::core::record::field_extent;
use crate::core::ticks::{nice_ticks, tick_precision};
use crate::core::{Field, StateRecord};
use crate::error::{ChartError, ChartResult};

/// Multiplicative padding applied to a field's extent when fitting a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePadding {
    /// Factor applied to the minimum value.
    pub lower: f64,
    /// Factor applied to the maximum value.
    pub upper: f64,
}

impl Default for ScalePadding {
    fn default() -> Self {
        Self {
            lower: 0.9,
            upper: 1.1,
        }
    }
}

impl ScalePadding {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale padding factors must be finite and lower must be > 0".to_owned(),
            ));
        }
        if self.lower > self.upper {
            return Err(ChartError::InvalidData(
                "scale padding lower factor must be <= upper factor".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Linear, invertible mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Fits a scale to `field` over `records`.
    ///
    /// The domain is `[lower * min, upper * max]`. When every value collapses
    /// the domain to zero width, the unit interval centred on the value is
    /// used instead.
    pub fn from_field(
        records: &[StateRecord],
        field: Field,
        range: (f64, f64),
        padding: ScalePadding,
    ) -> ChartResult<Self> {
        let padding = padding.validate()?;
        let (min, max) = field_extent(records, field).ok_or_else(|| {
            ChartError::InvalidData("cannot fit a scale to an empty record set".to_owned())
        })?;

        let mut domain = (min * padding.lower, max * padding.upper);
        if !(domain.1 - domain.0).is_normal() {
            let center = (min + max) / 2.0;
            domain = (center - 0.5, center + 0.5);
        }

        Self::new(domain, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Same range, domain blended towards `target` by `t` in `[0, 1]`.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Self {
            domain_start: lerp(self.domain_start, target.domain_start),
            domain_end: lerp(self.domain_end, target.domain_end),
            range_start: lerp(self.range_start, target.range_start),
            range_end: lerp(self.range_end, target.range_end),
        }
    }

    /// Round tick values inside the domain, about `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Decimal places tick labels need for a `count`-tick layout.
    #[must_use]
    pub fn tick_precision(self, count: usize) -> usize {
        tick_precision(self.domain_start, self.domain_end, count)
    }
}
