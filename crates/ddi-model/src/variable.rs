//! Variable records as emitted per dataset.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::CategorySet;
use crate::language::Language;
use crate::statistics::Statistics;

/// Scale value for variables whose interval type is `labeled_numeric`.
pub const CATEGORICAL_SCALE: &str = "cat";

/// Dataset-level fields merged from the auxiliary datasets table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub analysis_unit: String,
    pub sub_type: String,
    pub boost: String,
    pub period: String,
}

/// One variable of one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub study: String,
    /// Lower-cased variable identifier; the key inside its dataset.
    pub name: String,
    /// Identifier as written in the source document.
    pub name_cs: String,
    pub dataset: String,
    pub label: String,
    pub categories: CategorySet,
    pub statistics: Statistics,
    pub scale: String,
    pub enrichment: Option<Enrichment>,
    pub translated_labels: BTreeMap<Language, String>,
}

impl Variable {
    pub fn new(study: impl Into<String>, dataset: impl Into<String>, id: &str) -> Self {
        Self {
            study: study.into(),
            name: id.to_lowercase(),
            name_cs: id.to_string(),
            dataset: dataset.into(),
            label: String::new(),
            categories: CategorySet::default(),
            statistics: Statistics::default(),
            scale: String::new(),
            enrichment: None,
            translated_labels: BTreeMap::new(),
        }
    }

    pub fn is_categorical(&self) -> bool {
        self.scale == CATEGORICAL_SCALE
    }

    pub fn translated_label(&self, language: &Language) -> Option<&str> {
        self.translated_labels.get(language).map(String::as_str)
    }

    pub fn set_translated_label(&mut self, language: Language, label: String) {
        self.translated_labels.insert(language, label);
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("study", &self.study)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("name_cs", &self.name_cs)?;
        map.serialize_entry("variable", &self.name)?;
        map.serialize_entry("dataset", &self.dataset)?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("categories", &self.categories)?;
        map.serialize_entry("statistics", &self.statistics)?;
        map.serialize_entry("scale", &self.scale)?;
        if let Some(enrichment) = &self.enrichment {
            map.serialize_entry("analysis_unit", &enrichment.analysis_unit)?;
            map.serialize_entry("sub_type", &enrichment.sub_type)?;
            map.serialize_entry("boost", &enrichment.boost)?;
            map.serialize_entry("period", &enrichment.period)?;
        }
        for (language, label) in &self.translated_labels {
            map.serialize_entry(&language.label_key(), label)?;
        }
        map.end()
    }
}
