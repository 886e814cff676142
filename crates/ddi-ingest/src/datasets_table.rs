//! The auxiliary datasets table (`datasets.csv`).
//!
//! Rows are keyed by `dataset_name`; the remaining columns are optional. Only the first
//! row for a dataset name is kept. A missing column and an empty cell are kept apart.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::warn;

use crate::error::{IngestError, Result};

pub const DATASET_NAME_COLUMN: &str = "dataset_name";
pub const ANALYSIS_UNIT_COLUMN: &str = "analysis_unit_name";
pub const CONCEPTUAL_DATASET_COLUMN: &str = "conceptual_dataset_name";
pub const BOOST_COLUMN: &str = "boost";
pub const PERIOD_COLUMN: &str = "period_name";

/// One optional field of a datasets table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableCell {
    /// The table has no such column.
    #[default]
    NoColumn,
    /// The column exists but the cell is blank.
    Blank,
    Text(String),
}

/// Descriptive fields of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRow {
    pub analysis_unit_name: TableCell,
    pub conceptual_dataset_name: TableCell,
    pub boost: TableCell,
    pub period_name: TableCell,
}

#[derive(Debug, Clone)]
pub struct DatasetsTable {
    path: PathBuf,
    has_key_column: bool,
    rows: BTreeMap<String, DatasetRow>,
}

impl DatasetsTable {
    /// Looks up the first row for `dataset`.
    ///
    /// Fails when the table has no `dataset_name` column.
    pub fn lookup(&self, dataset: &str) -> Result<Option<&DatasetRow>> {
        if !self.has_key_column {
            return Err(IngestError::MissingColumn {
                column: DATASET_NAME_COLUMN.to_string(),
                path: self.path.clone(),
            });
        }
        Ok(self.rows.get(dataset))
    }

    /// Number of datasets with a row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: Option<&str>) -> TableCell {
    match raw.map(str::trim) {
        Some("") | None => TableCell::Blank,
        Some(text) => TableCell::Text(text.to_string()),
    }
}

pub fn load_datasets_table(path: &Path) -> Result<DatasetsTable> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let column = |name: &str| headers.iter().position(|header| header == name);
    let key_index = column(DATASET_NAME_COLUMN);
    let unit_index = column(ANALYSIS_UNIT_COLUMN);
    let conceptual_index = column(CONCEPTUAL_DATASET_COLUMN);
    let boost_index = column(BOOST_COLUMN);
    let period_index = column(PERIOD_COLUMN);

    let mut table = DatasetsTable {
        path: path.to_path_buf(),
        has_key_column: key_index.is_some(),
        rows: BTreeMap::new(),
    };
    let Some(key_index) = key_index else {
        warn!(
            path = %path.display(),
            "datasets table has no {DATASET_NAME_COLUMN} column, enrichment disabled"
        );
        return Ok(table);
    };

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let cell = |index: Option<usize>| match index {
            Some(i) => normalize_cell(record.get(i)),
            None => TableCell::NoColumn,
        };
        let Some(name) = record.get(key_index).map(str::trim) else {
            continue;
        };
        if name.is_empty() || table.rows.contains_key(name) {
            continue;
        }
        let row = DatasetRow {
            analysis_unit_name: cell(unit_index),
            conceptual_dataset_name: cell(conceptual_index),
            boost: cell(boost_index),
            period_name: cell(period_index),
        };
        table.rows.insert(name.to_string(), row);
    }
    Ok(table)
}
