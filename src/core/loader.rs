use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::core::{Field, RecordSet, StateRecord};
use crate::error::{ChartError, ChartResult};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "state",
    "abbr",
    "poverty",
    "age",
    "income",
    "healthcare",
    "smokes",
    "obesity",
];

#[derive(Debug, Deserialize)]
struct CsvRow {
    state: String,
    abbr: String,
    poverty: f64,
    age: f64,
    income: f64,
    healthcare: f64,
    smokes: f64,
    obesity: f64,
}

impl From<CsvRow> for StateRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            state: row.state,
            abbr: row.abbr,
            poverty: row.poverty,
            age: row.age,
            income: row.income,
            healthcare: row.healthcare,
            smokes: row.smokes,
            obesity: row.obesity,
        }
    }
}

/// Loads the record set from a CSV file. One attempt, no retry.
pub fn load_records_from_path(path: impl AsRef<Path>) -> ChartResult<RecordSet> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path)
        .map_err(|err| ChartError::data_load(&source_name, format!("cannot open file: {err}")))?;
    load_records_from_reader(file, &source_name)
}

/// Loads the record set from any CSV byte stream.
///
/// `source_name` only labels errors and log lines.
pub fn load_records_from_reader<R: Read>(reader: R, source_name: &str) -> ChartResult<RecordSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| ChartError::data_load(source_name, format!("unreadable header: {err}")))?
        .clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(ChartError::data_load(
            source_name,
            format!("missing required column `{missing}`"),
        ));
    }

    let mut records = Vec::new();
    for (row_index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = row_index + 2;
        let row = row.map_err(|err| {
            ChartError::data_load(source_name, format!("malformed row at line {line}: {err}"))
        })?;
        let record = StateRecord::from(row);
        record.validate().map_err(|err| {
            ChartError::data_load(source_name, format!("invalid row at line {line}: {err}"))
        })?;
        trace!(line, abbr = %record.abbr, "parsed record");
        records.push(record);
    }

    if records.is_empty() {
        return Err(ChartError::data_load(source_name, "no data rows"));
    }

    let set = RecordSet::new(records)
        .map_err(|err| ChartError::data_load(source_name, err.to_string()))?;
    debug!(
        source = source_name,
        records = set.len(),
        poverty_extent = ?set.extent(Field::Poverty),
        "loaded records"
    );
    Ok(set)
}
