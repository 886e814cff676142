//! Dataset-level enrichment from the datasets table.
//!
//! A field whose column is missing reads `None` (boost `1`); a blank cell reads `nan`.

use ddi_ingest::{DatasetRow, DatasetsTable, IngestError, TableCell};
use ddi_model::Enrichment;

/// Text used for a field whose column is missing.
const ABSENT: &str = "None";
/// Text used for a blank cell.
const BLANK: &str = "nan";
/// Boost applied when the table has no boost column.
const DEFAULT_BOOST: &str = "1";

/// Looks up the enrichment fields for `dataset`.
///
/// `Ok(None)` means the table has no row for the dataset.
pub fn enrichment_for(
    table: &DatasetsTable,
    dataset: &str,
) -> Result<Option<Enrichment>, IngestError> {
    Ok(table.lookup(dataset)?.map(enrichment_from_row))
}

pub fn enrichment_from_row(row: &DatasetRow) -> Enrichment {
    Enrichment {
        analysis_unit: cell_text(&row.analysis_unit_name, ABSENT),
        sub_type: cell_text(&row.conceptual_dataset_name, ABSENT),
        boost: cell_text(&row.boost, DEFAULT_BOOST),
        period: format_period(&row.period_name),
    }
}

fn cell_text(cell: &TableCell, no_column: &str) -> String {
    match cell {
        TableCell::NoColumn => no_column.to_string(),
        TableCell::Blank => BLANK.to_string(),
        TableCell::Text(text) => text.clone(),
    }
}

/// Numeric periods are printed without decimals, anything else as written.
pub fn format_period(cell: &TableCell) -> String {
    let TableCell::Text(text) = cell else {
        return cell_text(cell, ABSENT);
    };
    match text.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => format!("{number:.0}"),
        _ => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> TableCell {
        TableCell::Text(value.to_string())
    }

    #[test]
    fn period_formatting() {
        assert_eq!(format_period(&text("2010")), "2010");
        assert_eq!(format_period(&text("2010.0")), "2010");
        assert_eq!(format_period(&text("2010.7")), "2011");
        assert_eq!(format_period(&text("2010-2012")), "2010-2012");
        assert_eq!(format_period(&text("wave a")), "wave a");
        assert_eq!(format_period(&TableCell::NoColumn), "None");
        assert_eq!(format_period(&TableCell::Blank), "nan");
    }

    #[test]
    fn missing_columns_are_coerced() {
        let enrichment = enrichment_from_row(&DatasetRow::default());
        assert_eq!(enrichment.analysis_unit, "None");
        assert_eq!(enrichment.sub_type, "None");
        assert_eq!(enrichment.boost, "1");
        assert_eq!(enrichment.period, "None");
    }

    #[test]
    fn blank_cells_read_nan() {
        let row = DatasetRow {
            analysis_unit_name: TableCell::Blank,
            conceptual_dataset_name: TableCell::NoColumn,
            boost: TableCell::Blank,
            period_name: TableCell::Blank,
        };
        let enrichment = enrichment_from_row(&row);
        assert_eq!(enrichment.analysis_unit, "nan");
        assert_eq!(enrichment.sub_type, "None");
        assert_eq!(enrichment.boost, "nan");
        assert_eq!(enrichment.period, "nan");
    }

    #[test]
    fn present_fields_are_copied() {
        let row = DatasetRow {
            analysis_unit_name: text("p"),
            conceptual_dataset_name: text("persons_core"),
            boost: text("2"),
            period_name: text("2012"),
        };
        let enrichment = enrichment_from_row(&row);
        assert_eq!(enrichment.analysis_unit, "p");
        assert_eq!(enrichment.sub_type, "persons_core");
        assert_eq!(enrichment.boost, "2");
        assert_eq!(enrichment.period, "2012");
    }
}
