//! Archive conversion driver.
//!
//! The primary language files are converted first and define every dataset and variable.
//! Files of other languages are merged afterwards; their failures are collected as issues
//! and never stop the run, while any primary failure aborts it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use ddi_ingest::{
    ArchiveFiles, DatasetsTable, discover_archive, language_from_path, load_datasets_table,
    read_variables,
};
use ddi_model::{DatasetStore, Variable};
use tracing::{debug, info, info_span, trace, warn};

use crate::builder::build_variable;
use crate::config::ConvertConfig;
use crate::enrich::enrichment_for;
use crate::error::{CoreError, Result};
use crate::translate::merge_translation;

/// A recovered failure of the translation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationIssue {
    pub path: PathBuf,
    /// `dataset/variable` when the failure concerns a single variable.
    pub variable: Option<String>,
    pub message: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub primary_files: usize,
    pub secondary_files: usize,
    pub variables_read: usize,
    pub translations_merged: usize,
    pub issues: Vec<TranslationIssue>,
}

impl ConversionReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Owns the dataset store for one conversion run.
#[derive(Debug)]
pub struct ArchiveConverter {
    config: ConvertConfig,
    datasets_table: Option<DatasetsTable>,
    store: DatasetStore,
}

impl ArchiveConverter {
    /// Validates `config` and loads the datasets table, if one is configured.
    pub fn new(config: ConvertConfig) -> Result<Self> {
        config.validate()?;
        let datasets_table = match &config.datasets_csv {
            Some(path) => {
                let table = load_datasets_table(path)?;
                debug!(path = %path.display(), rows = table.row_count(), "loaded datasets table");
                Some(table)
            }
            None => None,
        };
        Ok(Self::with_table(config, datasets_table))
    }

    /// Creates a converter around an already loaded datasets table.
    pub fn with_table(config: ConvertConfig, datasets_table: Option<DatasetsTable>) -> Self {
        Self {
            config,
            datasets_table,
            store: DatasetStore::new(),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn into_store(self) -> DatasetStore {
        self.store
    }

    /// Discovers the files of the configured version.
    pub fn discover(&self) -> Result<ArchiveFiles> {
        Ok(discover_archive(
            &self.config.root,
            &self.config.latest_version,
            &self.config.primary_language,
        )?)
    }

    /// Converts the configured version.
    pub fn run(&mut self) -> Result<ConversionReport> {
        let span = info_span!(
            "convert",
            study = %self.config.study,
            version = %self.config.latest_version
        );
        let _guard = span.enter();
        let files = self.discover()?;
        if files.is_empty() {
            let version_dir = self.config.root.join(&self.config.latest_version);
            warn!(version_dir = %version_dir.display(), "no XML files found");
        }
        info!(
            files = files.len(),
            primary = files.primary.len(),
            secondary = files.secondary.len(),
            "discovered archive files"
        );
        self.convert_files(&files)
    }

    /// Runs the primary pass over `files.primary`, then the translation pass.
    pub fn convert_files(&mut self, files: &ArchiveFiles) -> Result<ConversionReport> {
        let start = Instant::now();
        let mut report = ConversionReport {
            primary_files: files.primary.len(),
            secondary_files: files.secondary.len(),
            ..ConversionReport::default()
        };
        for path in &files.primary {
            report.variables_read += self.read_primary_file(path)?;
        }
        for path in &files.secondary {
            self.translate_file(path, &mut report);
        }
        if self.store.is_empty() {
            warn!("primary language files define no variables");
        }
        info!(
            datasets = self.store.dataset_count(),
            variables = self.store.variable_count(),
            issues = report.issues.len(),
            duration_ms = start.elapsed().as_millis(),
            "conversion complete"
        );
        Ok(report)
    }

    /// Builds and stores every variable of a primary-language file.
    ///
    /// Returns the number of variables read.
    pub fn read_primary_file(&mut self, path: &Path) -> Result<usize> {
        info!(path = %path.display(), "read");
        let in_file = |source: CoreError| CoreError::File {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let raw_variables = read_variables(path).map_err(|e| in_file(e.into()))?;
        for raw in &raw_variables {
            let mut variable = build_variable(raw, &self.config.study).map_err(in_file)?;
            self.enrich(&mut variable);
            if let Some(previous) = self.store.insert(variable) {
                trace!(
                    dataset = %previous.dataset,
                    variable = %previous.name,
                    "replaced earlier record"
                );
            }
        }
        Ok(raw_variables.len())
    }

    fn enrich(&self, variable: &mut Variable) {
        let Some(table) = &self.datasets_table else {
            return;
        };
        match enrichment_for(table, &variable.dataset) {
            Ok(Some(enrichment)) => variable.enrichment = Some(enrichment),
            Ok(None) => trace!(dataset = %variable.dataset, "no datasets table row"),
            Err(error) => trace!(dataset = %variable.dataset, %error, "enrichment skipped"),
        }
    }

    /// Merges the translations of one secondary file, recording failures in `report`.
    pub fn translate_file(&mut self, path: &Path, report: &mut ConversionReport) {
        info!(path = %path.display(), "translate");
        let language = match language_from_path(path) {
            Ok(language) => language,
            Err(error) => {
                record_issue(report, path, None, &error);
                return;
            }
        };
        let raw_variables = match read_variables(path) {
            Ok(raw_variables) => raw_variables,
            Err(error) => {
                record_issue(report, path, None, &error);
                return;
            }
        };
        for raw in &raw_variables {
            match merge_translation(&mut self.store, raw, &language, self.config.alignment) {
                Ok(()) => report.translations_merged += 1,
                Err(error) => {
                    let variable = match (&raw.dataset, &raw.id) {
                        (Some(dataset), Some(id)) => {
                            Some(format!("{dataset}/{}", id.to_lowercase()))
                        }
                        _ => None,
                    };
                    record_issue(report, path, variable, &error);
                }
            }
        }
    }
}

fn record_issue(
    report: &mut ConversionReport,
    path: &Path,
    variable: Option<String>,
    error: &dyn std::error::Error,
) {
    warn!(
        path = %path.display(),
        variable = variable.as_deref().unwrap_or("-"),
        %error,
        "failed to parse translation"
    );
    report.issues.push(TranslationIssue {
        path: path.to_path_buf(),
        variable,
        message: error.to_string(),
    });
}
