use std::ops::Index;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Field;
use crate::error::{ChartError, ChartResult};

/// One US state row of demographic and health observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl StateRecord {
    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Healthcare => self.healthcare,
            Field::Smokes => self.smokes,
            Field::Obesity => self.obesity,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.abbr.trim().is_empty() {
            return Err(ChartError::InvalidData(format!(
                "record `{}` has an empty abbreviation",
                self.state
            )));
        }
        for field in Field::ALL {
            let value = self.value(field);
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "record `{}` field `{field}` must be finite and >= 0, got {value}",
                    self.state
                )));
            }
        }
        Ok(())
    }
}

/// Immutable, cheaply clonable set of loaded records.
///
/// A record's index is its identity: markers and labels are keyed by it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Arc<[StateRecord]>,
}

impl RecordSet {
    pub fn new(records: Vec<StateRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "record set must contain at least one record".to_owned(),
            ));
        }
        for record in &records {
            record.validate()?;
        }
        Ok(Self {
            records: records.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StateRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[StateRecord] {
        &self.records
    }

    /// Minimum and maximum of `field` over every record.
    #[must_use]
    pub fn extent(&self, field: Field) -> (f64, f64) {
        field_extent(&self.records, field).unwrap_or((0.0, 0.0))
    }

    #[must_use]
    pub fn position_of_abbr(&self, abbr: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.abbr.eq_ignore_ascii_case(abbr))
    }
}

impl Index<usize> for RecordSet {
    type Output = StateRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a StateRecord;
    type IntoIter = std::slice::Iter<'a, StateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub(crate) fn field_extent(records: &[StateRecord], field: Field) -> Option<(f64, f64)> {
    let min = records
        .iter()
        .map(|record| OrderedFloat(record.value(field)))
        .min()?;
    let max = records
        .iter()
        .map(|record| OrderedFloat(record.value(field)))
        .max()?;
    Some((min.into_inner(), max.into_inner()))
}
