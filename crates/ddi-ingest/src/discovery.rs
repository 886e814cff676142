//! Archive file discovery.
//!
//! An archive is laid out as `<root>/<version>/<lang>/<name>.xml`. Files below the primary
//! language directory establish the variable records, every other language directory only
//! contributes translations.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use ddi_model::Language;
use regex::Regex;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Language directory directly above an XML file name.
static LANGUAGE_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|/)(\w{2})/[\w\-]+\.xml$").expect("Invalid language path regex")
});

/// XML files of one archive version, split by pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveFiles {
    /// Files of the primary language, sorted by path.
    pub primary: Vec<PathBuf>,
    /// Files of all other languages, sorted by path.
    pub secondary: Vec<PathBuf>,
}

impl ArchiveFiles {
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// Lists all XML files directly inside `dir`, sorted by path.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = read_dir_paths(dir)?
        .into_iter()
        .filter(|path| path.is_file() && has_xml_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Lists the sub-directories of a version directory, sorted by path.
pub fn list_language_dirs(version_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = read_dir_paths(version_dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Collects the primary and secondary files of `<root>/<version>`.
///
/// A missing primary language directory yields an empty primary set; a missing version
/// directory is an error.
pub fn discover_archive(root: &Path, version: &str, primary: &Language) -> Result<ArchiveFiles> {
    let version_dir = root.join(version);
    if !version_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound { path: version_dir });
    }

    let primary_dir = version_dir.join(primary.as_str());
    let primary_files = if primary_dir.is_dir() {
        list_xml_files(&primary_dir)?
    } else {
        debug!(path = %primary_dir.display(), "primary language directory missing");
        Vec::new()
    };

    let primary_set: BTreeSet<&PathBuf> = primary_files.iter().collect();
    let mut secondary = Vec::new();
    for dir in list_language_dirs(&version_dir)? {
        for file in list_xml_files(&dir)? {
            if !primary_set.contains(&file) {
                secondary.push(file);
            }
        }
    }
    secondary.sort();

    Ok(ArchiveFiles {
        primary: primary_files,
        secondary,
    })
}

/// Derives the language of a translation file from its parent directory name.
pub fn language_from_path(path: &Path) -> Result<Language> {
    let normalized = path.to_string_lossy().replace('\\', "/");
    LANGUAGE_DIR_REGEX
        .captures(&normalized)
        .and_then(|captures| captures.get(1))
        .and_then(|code| Language::new(code.as_str()).ok())
        .ok_or_else(|| IngestError::NoLanguage {
            path: path.to_path_buf(),
        })
}

fn read_dir_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut paths = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    Ok(paths)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_comes_from_parent_directory() {
        let lang = language_from_path(Path::new("r2ddi/v1/de/persons.xml")).unwrap();
        assert_eq!(lang.as_str(), "de");

        let lang = language_from_path(Path::new("de/p-file_2.XML")).unwrap();
        assert_eq!(lang.as_str(), "de");
    }

    #[test]
    fn language_requires_two_letter_directory() {
        assert!(language_from_path(Path::new("r2ddi/v1/deu/persons.xml")).is_err());
        assert!(language_from_path(Path::new("persons.xml")).is_err());
        assert!(language_from_path(Path::new("r2ddi/v1/de/persons.v2.xml")).is_err());
    }

    #[test]
    fn xml_extension_is_case_insensitive() {
        assert!(has_xml_extension(Path::new("a.xml")));
        assert!(has_xml_extension(Path::new("a.XML")));
        assert!(!has_xml_extension(Path::new("a.csv")));
        assert!(!has_xml_extension(Path::new("xml")));
    }
}
