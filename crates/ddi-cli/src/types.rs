use std::path::PathBuf;

use ddi_core::ConversionReport;
use ddi_model::Language;
use ddi_output::OutputFormat;

#[derive(Debug)]
pub struct ConvertResult {
    pub study: String,
    pub version: String,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    /// Empty on a dry run.
    pub outputs: Vec<PathBuf>,
    pub dry_run: bool,
    pub datasets: Vec<DatasetSummary>,
    pub report: ConversionReport,
}

#[derive(Debug)]
pub struct DatasetSummary {
    pub name: String,
    pub variables: usize,
    pub categorical: usize,
    /// Languages with at least one merged label.
    pub languages: Vec<Language>,
}

#[derive(Debug)]
pub struct LanguageSummary {
    pub directory: String,
    pub language: Option<Language>,
    pub files: usize,
    pub primary: bool,
}
