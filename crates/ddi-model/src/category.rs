//! Category sets: the coded values of a categorical variable.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::language::Language;

/// One coded value of a categorical variable after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub value: String,
    pub label: String,
    pub missing: bool,
    pub frequency: u64,
}

/// Four parallel sequences describing the categories of one variable.
///
/// `values`, `labels`, `missings` and `frequencies` always have the same length and share
/// one ordering. Translated label lists are attached per language and never change that
/// ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    values: Vec<String>,
    labels: Vec<String>,
    missings: Vec<bool>,
    frequencies: Vec<u64>,
    translated_labels: BTreeMap<Language, Vec<String>>,
}

impl CategorySet {
    /// Builds a set from categories that are already in their final order.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let mut set = Self {
            values: Vec::with_capacity(categories.len()),
            labels: Vec::with_capacity(categories.len()),
            missings: Vec::with_capacity(categories.len()),
            frequencies: Vec::with_capacity(categories.len()),
            translated_labels: BTreeMap::new(),
        };
        for category in categories {
            set.values.push(category.value);
            set.labels.push(category.label);
            set.missings.push(category.missing);
            set.frequencies.push(category.frequency);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn missings(&self) -> &[bool] {
        &self.missings
    }

    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    /// Consumes the set and returns its primary label sequence.
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    pub fn translated_labels(&self, language: &Language) -> Option<&[String]> {
        self.translated_labels.get(language).map(Vec::as_slice)
    }

    pub fn translated_languages(&self) -> impl Iterator<Item = &Language> {
        self.translated_labels.keys()
    }

    /// Stores (or replaces) the label list for `language`.
    pub fn set_translated_labels(&mut self, language: Language, labels: Vec<String>) {
        self.translated_labels.insert(language, labels);
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + self.translated_labels.len()))?;
        map.serialize_entry("values", &self.values)?;
        map.serialize_entry("labels", &self.labels)?;
        map.serialize_entry("missings", &self.missings)?;
        map.serialize_entry("frequencies", &self.frequencies)?;
        for (language, labels) in &self.translated_labels {
            map.serialize_entry(&language.labels_key(), labels)?;
        }
        map.end()
    }
}
