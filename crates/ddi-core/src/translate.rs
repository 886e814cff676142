//! Merging secondary-language labels into existing records.

use std::collections::BTreeMap;

use ddi_ingest::RawVariable;
use ddi_model::{CategorySet, DatasetStore, Language};

use crate::builder::variable_key;
use crate::categories::normalize_categories;
use crate::config::TranslationAlignment;
use crate::error::{CoreError, Result};

/// Adds the `language` label and category labels of `raw` to its primary record.
///
/// The record must already exist; translations never create datasets or variables.
/// Nothing is changed when the merge fails.
pub fn merge_translation(
    store: &mut DatasetStore,
    raw: &RawVariable,
    language: &Language,
    alignment: TranslationAlignment,
) -> Result<()> {
    let (dataset, id) = variable_key(raw)?;
    let name = id.to_lowercase();
    let Some(variable) = store.get_mut(dataset, &name) else {
        return Err(CoreError::UnknownVariable {
            dataset: dataset.to_string(),
            variable: name,
        });
    };

    let translated =
        normalize_categories(&raw.categories).map_err(|source| CoreError::Categories {
            dataset: dataset.to_string(),
            variable: name.clone(),
            source,
        })?;
    let labels = match alignment {
        TranslationAlignment::Positional => translated.into_labels(),
        TranslationAlignment::ByValue => labels_by_value(&variable.categories, &translated),
    };

    variable.set_translated_label(language.clone(), raw.label.clone().unwrap_or_default());
    variable
        .categories
        .set_translated_labels(language.clone(), labels);
    Ok(())
}

/// Picks, for each primary category, the translated label with the same value.
fn labels_by_value(primary: &CategorySet, translated: &CategorySet) -> Vec<String> {
    let mut by_value: BTreeMap<&str, &str> = BTreeMap::new();
    for (value, label) in translated.values().iter().zip(translated.labels()) {
        by_value.entry(value.as_str()).or_insert(label.as_str());
    }
    primary
        .values()
        .iter()
        .map(|value| {
            by_value
                .get(value.as_str())
                .map_or_else(|| value.clone(), |label| (*label).to_string())
        })
        .collect()
}
