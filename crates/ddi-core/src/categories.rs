//! Category normalization.
//!
//! Categories are first ordered in two phases (integer values by number, then all other
//! values by raw text), converted to their output form, and finally ordered once more by
//! the numeric value of their trimmed code. The second ordering is stable, so the first
//! one decides ties.

use ddi_ingest::RawCategory;
use ddi_model::{Category, CategorySet};

use crate::error::CategoryError;

/// Marker attribute value flagging a missing-data category.
const MISSING_TRUE: &str = "true";

/// Result of trying to read a category code as an integer.
enum CodeKind<'a> {
    Integer(i64),
    Text(&'a str),
}

fn code_kind(raw: &RawCategory) -> CodeKind<'_> {
    let text = raw.value.as_deref().unwrap_or_default();
    match text.trim().parse::<i64>() {
        Ok(number) => CodeKind::Integer(number),
        Err(_) => CodeKind::Text(text),
    }
}

/// Orders raw categories: integer codes ascending, then non-integer codes by raw text.
fn two_phase_order(raw: &[RawCategory]) -> Vec<&RawCategory> {
    let mut integers: Vec<(i64, &RawCategory)> = Vec::new();
    let mut texts: Vec<(&str, &RawCategory)> = Vec::new();
    for category in raw {
        match code_kind(category) {
            CodeKind::Integer(number) => integers.push((number, category)),
            CodeKind::Text(text) => texts.push((text, category)),
        }
    }
    integers.sort_by_key(|(number, _)| *number);
    texts.sort_by(|a, b| a.0.cmp(b.0));
    integers
        .into_iter()
        .map(|(_, category)| category)
        .chain(texts.into_iter().map(|(_, category)| category))
        .collect()
}

fn to_category(raw: &RawCategory) -> Category {
    let value = raw.value.as_deref().unwrap_or_default().trim().to_string();
    let label = match raw.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => value.clone(),
    };
    let frequency = raw
        .frequency
        .as_deref()
        .and_then(|text| text.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let missing = raw
        .missing
        .as_deref()
        .is_some_and(|flag| flag.to_lowercase() == MISSING_TRUE);
    Category {
        value,
        label,
        missing,
        frequency,
    }
}

/// Builds the ordered category set of one variable.
///
/// Fails when a category code is not a number, since the final ordering is numeric.
pub fn normalize_categories(raw: &[RawCategory]) -> Result<CategorySet, CategoryError> {
    let mut keyed = Vec::with_capacity(raw.len());
    for category in two_phase_order(raw).into_iter().map(to_category) {
        let key = category
            .value
            .parse::<f64>()
            .map_err(|_| CategoryError::NonNumericValue {
                value: category.value.clone(),
            })?;
        keyed.push((key, category));
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(CategorySet::from_categories(
        keyed.into_iter().map(|(_, category)| category).collect(),
    ))
}
