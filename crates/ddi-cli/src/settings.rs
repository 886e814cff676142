//! Run settings from an optional TOML file merged with command line flags.
//!
//! ```toml
//! study = "soep-core"
//! root = "r2ddi"
//! versions = ["v1", "v2"]
//! latest_version = "v2"
//! primary_language = "en"
//! datasets_csv = "ddionrails/datasets.csv"
//! format = "json"
//! output_dir = "ddionrails/datasets"
//! align_by_value = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use ddi_core::{ConvertConfig, TranslationAlignment};
use ddi_model::Language;
use ddi_output::OutputFormat;
use serde::Deserialize;
use tracing::debug;

/// Datasets table used when none is configured, if it exists.
pub const DEFAULT_DATASETS_CSV: &str = "ddionrails/datasets.csv";

/// Every setting is optional; later layers override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub study: Option<String>,
    pub root: Option<PathBuf>,
    pub versions: Option<Vec<String>>,
    pub latest_version: Option<String>,
    pub primary_language: Option<String>,
    pub datasets_csv: Option<PathBuf>,
    /// Skip the datasets table even if one is configured or the default exists.
    pub no_datasets_csv: Option<bool>,
    pub format: Option<OutputFormat>,
    /// Defaults to the directory of the chosen format.
    pub output_dir: Option<PathBuf>,
    pub align_by_value: Option<bool>,
}

/// Archive root, versions and primary language.
#[derive(Debug, Clone)]
pub struct ArchiveLocation {
    pub root: PathBuf,
    pub versions: Vec<String>,
    pub latest_version: String,
    pub primary_language: Language,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub convert: ConvertConfig,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Reads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings file {}", path.display()))
    }

    /// Returns `self` with every field set in `overrides` replaced.
    #[must_use]
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            study: overrides.study.or(self.study),
            root: overrides.root.or(self.root),
            versions: overrides.versions.or(self.versions),
            latest_version: overrides.latest_version.or(self.latest_version),
            primary_language: overrides.primary_language.or(self.primary_language),
            datasets_csv: overrides.datasets_csv.or(self.datasets_csv),
            no_datasets_csv: overrides.no_datasets_csv.or(self.no_datasets_csv),
            format: overrides.format.or(self.format),
            output_dir: overrides.output_dir.or(self.output_dir),
            align_by_value: overrides.align_by_value.or(self.align_by_value),
        }
    }

    /// Where the archive lives, with defaults applied.
    ///
    /// Without explicit versions the latest version is the only known one; without an
    /// explicit latest version the last listed version is converted.
    pub fn location(&self) -> Result<ArchiveLocation> {
        let defaults = ConvertConfig::new("");
        let (versions, latest_version) = match (&self.versions, &self.latest_version) {
            (Some(versions), Some(latest)) => (versions.clone(), latest.clone()),
            (Some(versions), None) => {
                let latest = versions
                    .last()
                    .cloned()
                    .ok_or_else(|| anyhow!("the list of versions is empty"))?;
                (versions.clone(), latest)
            }
            (None, Some(latest)) => (vec![latest.clone()], latest.clone()),
            (None, None) => (defaults.versions, defaults.latest_version),
        };
        let primary_language = match &self.primary_language {
            Some(code) => Language::new(code).context("primary language")?,
            None => defaults.primary_language,
        };
        Ok(ArchiveLocation {
            root: self.root.clone().unwrap_or(defaults.root),
            versions,
            latest_version,
            primary_language,
        })
    }

    /// Applies defaults and builds the converter configuration.
    pub fn resolve(self) -> Result<RunSettings> {
        let location = self.location()?;
        let study = self.study.ok_or_else(|| {
            anyhow!("no study identifier given (use --study or `study` in the settings file)")
        })?;
        let mut convert = ConvertConfig::new(study)
            .with_root(location.root)
            .with_versions(location.versions, location.latest_version)
            .with_primary_language(location.primary_language)
            .with_datasets_csv(resolve_datasets_csv(
                self.datasets_csv,
                self.no_datasets_csv.unwrap_or(false),
            ));
        if self.align_by_value.unwrap_or(false) {
            convert = convert.with_alignment(TranslationAlignment::ByValue);
        }
        convert.validate()?;
        let format = self.format.unwrap_or_default();
        Ok(RunSettings {
            convert,
            format,
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(format.default_dir())),
        })
    }
}

fn resolve_datasets_csv(explicit: Option<PathBuf>, disabled: bool) -> Option<PathBuf> {
    if disabled {
        return None;
    }
    if explicit.is_some() {
        return explicit;
    }
    let default = PathBuf::from(DEFAULT_DATASETS_CSV);
    if default.is_file() {
        debug!(path = %default.display(), "using default datasets table");
        Some(default)
    } else {
        None
    }
}
