//! Settings file loading and layering.

use std::fs;
use std::path::PathBuf;

use ddi_cli::settings::Settings;
use ddi_core::TranslationAlignment;
use ddi_output::OutputFormat;
use tempfile::TempDir;

#[test]
fn file_values_are_overridden_by_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ddi.toml");
    fs::write(
        &path,
        r#"
study = "soep-core"
root = "archive"
versions = ["v1", "v2"]
primary_language = "de"
no_datasets_csv = true
align_by_value = true
"#,
    )
    .unwrap();

    let file = Settings::load(&path).unwrap();
    assert_eq!(file.study.as_deref(), Some("soep-core"));

    let flags = Settings {
        latest_version: Some("v1".to_string()),
        output_dir: Some(PathBuf::from("out")),
        ..Settings::default()
    };
    let run = file.merge(flags).resolve().unwrap();
    assert_eq!(run.convert.study, "soep-core");
    assert_eq!(run.convert.root, PathBuf::from("archive"));
    assert_eq!(run.convert.latest_version, "v1");
    assert_eq!(run.convert.primary_language.as_str(), "de");
    assert_eq!(run.convert.alignment, TranslationAlignment::ByValue);
    assert!(run.convert.datasets_csv.is_none());
    assert_eq!(run.output_dir, PathBuf::from("out"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ddi.toml");
    fs::write(&path, "study = \"soep\"\nlanguage = \"en\"\n").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse settings file"));
}

#[test]
fn explicit_datasets_table_is_kept() {
    let settings = Settings {
        study: Some("soep".to_string()),
        datasets_csv: Some(PathBuf::from("tables/datasets.csv")),
        ..Settings::default()
    };
    let run = settings.resolve().unwrap();
    assert_eq!(
        run.convert.datasets_csv,
        Some(PathBuf::from("tables/datasets.csv"))
    );
}

#[test]
fn location_does_not_need_a_study() {
    let settings = Settings {
        latest_version: Some("v3".to_string()),
        ..Settings::default()
    };
    let location = settings.location().unwrap();
    assert_eq!(location.versions, vec!["v3".to_string()]);
    assert_eq!(location.root, PathBuf::from("r2ddi"));
    assert_eq!(location.primary_language.as_str(), "en");
}

#[test]
fn format_is_read_from_the_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ddi.toml");
    fs::write(&path, "study = \"soep\"\nformat = \"yaml\"\nno_datasets_csv = true\n").unwrap();

    let run = Settings::load(&path).unwrap().resolve().unwrap();
    assert_eq!(run.format, OutputFormat::Yaml);
    assert_eq!(run.output_dir, PathBuf::from("temp/datasets"));
}
