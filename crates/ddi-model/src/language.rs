//! Two-letter language tags used for translated labels.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A two-character language code such as `en` or `de`.
///
/// Codes are stored lower-cased so that `DE/` and `de/` directories feed the same
/// `label_de` field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let valid = trimmed.chars().count() == 2
            && trimmed.chars().all(|ch| ch.is_ascii_alphanumeric());
        if !valid {
            return Err(ModelError::InvalidLanguage {
                code: code.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the per-language variable label, e.g. `label_de`.
    pub fn label_key(&self) -> String {
        format!("label_{}", self.0)
    }

    /// Key of the per-language category label list, e.g. `labels_de`.
    pub fn labels_key(&self) -> String {
        format!("labels_{}", self.0)
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_letter_codes() {
        let lang = Language::new("DE").unwrap();
        assert_eq!(lang.as_str(), "de");
        assert_eq!(lang.label_key(), "label_de");
        assert_eq!(lang.labels_key(), "labels_de");
    }

    #[test]
    fn rejects_other_lengths() {
        assert!(Language::new("deu").is_err());
        assert!(Language::new("d").is_err());
        assert!(Language::new("d-").is_err());
        assert!(Language::new("").is_err());
    }
}
