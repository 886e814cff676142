//! Variable records from primary-language `var` elements.

use ddi_ingest::RawVariable;
use ddi_model::{CATEGORICAL_SCALE, Variable};

use crate::categories::normalize_categories;
use crate::error::{CoreError, Result};
use crate::statistics::extract_statistics;

/// Interval type that marks a variable as categorical.
const LABELED_NUMERIC: &str = "labeled_numeric";

/// Dataset name and identifier of a raw variable.
pub(crate) fn variable_key(raw: &RawVariable) -> Result<(&str, &str)> {
    let dataset = raw
        .dataset
        .as_deref()
        .ok_or(CoreError::MissingAttribute { attribute: "files" })?;
    let id = raw
        .id
        .as_deref()
        .ok_or(CoreError::MissingAttribute { attribute: "ID" })?;
    Ok((dataset, id))
}

/// Builds the canonical record of one variable.
pub fn build_variable(raw: &RawVariable, study: &str) -> Result<Variable> {
    let (dataset, id) = variable_key(raw)?;
    let mut variable = Variable::new(study, dataset, id);
    variable.label = raw.label.clone().unwrap_or_default();
    variable.categories =
        normalize_categories(&raw.categories).map_err(|source| CoreError::Categories {
            dataset: dataset.to_string(),
            variable: variable.name.clone(),
            source,
        })?;
    variable.statistics = extract_statistics(&raw.statistics);
    if raw.interval.as_deref() == Some(LABELED_NUMERIC) {
        variable.scale = CATEGORICAL_SCALE.to_string();
    }
    Ok(variable)
}
