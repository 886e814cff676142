//! Tests for the YAML writer.

use std::fs;

use ddi_model::{Category, CategorySet, DatasetStore, Language, Variable};
use ddi_output::{OutputFormat, dataset_to_yaml, write_outputs, write_yaml_outputs};
use tempfile::TempDir;

fn sample_store() -> DatasetStore {
    let mut sex = Variable::new("soep", "persons", "SEX");
    sex.label = "Sex".to_string();
    sex.scale = "cat".to_string();
    sex.categories = CategorySet::from_categories(vec![
        Category {
            value: "1".to_string(),
            label: "Male".to_string(),
            missing: false,
            frequency: 5,
        },
        Category {
            value: "2".to_string(),
            label: "Female".to_string(),
            missing: true,
            frequency: 7,
        },
    ]);
    sex.statistics.push(Some("vald".to_string()), "12".to_string());
    let de = Language::new("de").unwrap();
    sex.set_translated_label(de.clone(), "Geschlecht".to_string());
    sex.categories
        .set_translated_labels(de, vec!["Mann".to_string(), "Frau".to_string()]);

    let mut store = DatasetStore::new();
    store.insert(sex);
    store.insert(Variable::new("soep", "households", "HID"));
    store
}

#[test]
fn dataset_yaml_layout() {
    let store = sample_store();
    let yaml = dataset_to_yaml(store.dataset("persons").unwrap()).unwrap();
    insta::assert_snapshot!(yaml, @r"
    sex:
      study: soep
      name: sex
      name_cs: SEX
      variable: sex
      dataset: persons
      label: Sex
      categories:
        values:
        - '1'
        - '2'
        labels:
        - Male
        - Female
        missings:
        - false
        - true
        frequencies:
        - 5
        - 7
        labels_de:
        - Mann
        - Frau
      statistics:
        names:
        - vald
        values:
        - '12'
      scale: cat
      label_de: Geschlecht
    ");
}

#[test]
fn writes_yaml_files_and_keeps_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("datasets");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("old.yaml"), "{}").unwrap();
    fs::write(out.join("persons.json"), "{}").unwrap();

    let outputs = write_yaml_outputs(&sample_store(), &out).unwrap();
    assert_eq!(
        outputs,
        vec![out.join("persons.yaml"), out.join("households.yaml")]
    );
    assert!(!out.join("old.yaml").exists());
    assert!(out.join("persons.json").exists());

    let written = fs::read_to_string(out.join("persons.yaml")).unwrap();
    assert!(written.starts_with("sex:\n"));
    assert!(written.contains("label_de: Geschlecht"));
}

#[test]
fn format_selects_the_writer() {
    let dir = TempDir::new().unwrap();
    let outputs = write_outputs(&sample_store(), dir.path(), OutputFormat::Json).unwrap();
    assert_eq!(outputs[0], dir.path().join("persons.json"));
    assert_eq!(OutputFormat::Yaml.extension(), "yaml");
}
