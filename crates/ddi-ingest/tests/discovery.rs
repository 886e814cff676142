//! Tests for archive discovery.

use std::fs;
use std::path::Path;

use ddi_ingest::{IngestError, discover_archive, list_language_dirs, read_variables};
use ddi_model::Language;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("create dirs");
    fs::write(&path, "<codeBook/>").expect("write file");
}

fn file_names(paths: &[std::path::PathBuf], root: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            path.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn splits_primary_and_secondary_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "v1/en/persons.xml");
    touch(root, "v1/en/households.xml");
    touch(root, "v1/en/notes.txt");
    touch(root, "v1/de/persons.xml");
    touch(root, "v1/fr/households.xml");
    touch(root, "v1/fr/nested/deep.xml");
    touch(root, "v2/en/other.xml");

    let en = Language::new("en").unwrap();
    let files = discover_archive(root, "v1", &en).expect("discover");

    assert_eq!(
        file_names(&files.primary, root),
        vec!["v1/en/households.xml", "v1/en/persons.xml"]
    );
    assert_eq!(
        file_names(&files.secondary, root),
        vec!["v1/de/persons.xml", "v1/fr/households.xml"]
    );
    assert_eq!(files.len(), 4);

    let dirs = list_language_dirs(&root.join("v1")).unwrap();
    assert_eq!(dirs.len(), 3);
}

#[test]
fn missing_primary_directory_yields_no_primary_files() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "v1/de/persons.xml");

    let en = Language::new("en").unwrap();
    let files = discover_archive(dir.path(), "v1", &en).expect("discover");
    assert!(files.primary.is_empty());
    assert_eq!(files.secondary.len(), 1);
}

#[test]
fn missing_version_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let en = Language::new("en").unwrap();
    let err = discover_archive(dir.path(), "v9", &en).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn unreadable_file_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let err = read_variables(&dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
    assert!(err.to_string().contains("absent.xml"));
}
