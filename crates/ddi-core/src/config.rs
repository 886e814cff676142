//! Conversion settings.

use std::path::PathBuf;

use ddi_model::Language;

use crate::error::{CoreError, Result};

/// How translated category labels are matched to the primary categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslationAlignment {
    /// The n-th translated label belongs to the n-th primary category.
    #[default]
    Positional,
    /// Translated labels are matched by category value; unmatched categories fall back
    /// to their value.
    ByValue,
}

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Study identifier written into every record.
    pub study: String,
    /// Archive root containing one directory per version.
    pub root: PathBuf,
    /// Known archive versions.
    pub versions: Vec<String>,
    /// Version that is converted.
    pub latest_version: String,
    pub primary_language: Language,
    /// Optional datasets table used for enrichment.
    pub datasets_csv: Option<PathBuf>,
    pub alignment: TranslationAlignment,
}

impl ConvertConfig {
    pub fn new(study: impl Into<String>) -> Self {
        Self {
            study: study.into(),
            root: PathBuf::from("r2ddi"),
            versions: vec!["v1".to_string()],
            latest_version: "v1".to_string(),
            primary_language: Language::new("en").expect("valid default language"),
            datasets_csv: None,
            alignment: TranslationAlignment::default(),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the known versions and the version to convert.
    #[must_use]
    pub fn with_versions(mut self, versions: Vec<String>, latest: impl Into<String>) -> Self {
        self.versions = versions;
        self.latest_version = latest.into();
        self
    }

    #[must_use]
    pub fn with_primary_language(mut self, language: Language) -> Self {
        self.primary_language = language;
        self
    }

    #[must_use]
    pub fn with_datasets_csv(mut self, path: Option<PathBuf>) -> Self {
        self.datasets_csv = path;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: TranslationAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.study.trim().is_empty() {
            return Err(invalid("study identifier is empty"));
        }
        if self.latest_version.trim().is_empty() {
            return Err(invalid("latest version is empty"));
        }
        if !self.versions.iter().any(|v| v == &self.latest_version) {
            return Err(invalid(format!(
                "latest version '{}' is not one of the known versions [{}]",
                self.latest_version,
                self.versions.join(", ")
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_archive_layout() {
        let config = ConvertConfig::new("soep");
        assert_eq!(config.root, PathBuf::from("r2ddi"));
        assert_eq!(config.latest_version, "v1");
        assert_eq!(config.primary_language.as_str(), "en");
        assert_eq!(config.alignment, TranslationAlignment::Positional);
        config.validate().unwrap();
    }

    #[test]
    fn latest_version_must_be_known() {
        let config = ConvertConfig::new("soep")
            .with_versions(vec!["v1".to_string(), "v2".to_string()], "v3");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'v3'"));
    }

    #[test]
    fn study_must_not_be_empty() {
        assert!(ConvertConfig::new(" ").validate().is_err());
    }
}
