//! In-memory dataset → variable store filled during a conversion run.
//!
//! Datasets and variables keep the order in which they were first inserted.

use indexmap::IndexMap;
use serde::Serialize;

use crate::variable::Variable;

/// Variables of one dataset keyed by their lower-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    variables: IndexMap<String, Variable>,
}

impl Dataset {
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// All datasets of a run.
///
/// Datasets are created the first time a variable references them and are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatasetStore {
    datasets: IndexMap<String, Dataset>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `variable` under its dataset, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position. Returns the replaced record, if any.
    pub fn insert(&mut self, variable: Variable) -> Option<Variable> {
        self.datasets
            .entry(variable.dataset.clone())
            .or_default()
            .variables
            .insert(variable.name.clone(), variable)
    }

    pub fn get(&self, dataset: &str, name: &str) -> Option<&Variable> {
        self.datasets.get(dataset)?.get(name)
    }

    pub fn get_mut(&mut self, dataset: &str, name: &str) -> Option<&mut Variable> {
        self.datasets.get_mut(dataset)?.variables.get_mut(name)
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    /// Datasets in first-insertion order.
    pub fn datasets(&self) -> impl Iterator<Item = (&str, &Dataset)> {
        self.datasets.iter().map(|(name, dataset)| (name.as_str(), dataset))
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    pub fn variable_count(&self) -> usize {
        self.datasets.values().map(Dataset::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
