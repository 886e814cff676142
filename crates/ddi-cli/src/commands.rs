use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ddi_cli::settings::Settings;
use ddi_core::ArchiveConverter;
use ddi_ingest::{list_language_dirs, list_xml_files};
use ddi_model::{DatasetStore, Language};
use ddi_output::write_outputs;

use crate::cli::{ConvertArgs, LanguagesArgs};
use crate::types::{ConvertResult, DatasetSummary, LanguageSummary};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let settings = load_settings(args.config.as_deref(), args.to_settings())?;
    let run = settings.resolve()?;
    let study = run.convert.study.clone();
    let version = run.convert.latest_version.clone();

    let mut converter = ArchiveConverter::new(run.convert).context("prepare conversion")?;
    let report = converter.run().context("convert archive")?;
    let store = converter.into_store();
    let datasets = summarize_datasets(&store);

    let outputs = if args.dry_run {
        info!("dry run, no files written");
        Vec::new()
    } else {
        write_outputs(&store, &run.output_dir, run.format)?
    };

    Ok(ConvertResult {
        study,
        version,
        format: run.format,
        output_dir: run.output_dir,
        outputs,
        dry_run: args.dry_run,
        datasets,
        report,
    })
}

pub fn run_languages(args: &LanguagesArgs) -> Result<Vec<LanguageSummary>> {
    let settings = load_settings(args.config.as_deref(), args.archive.to_settings())?;
    let location = settings.location()?;
    let version_dir = location.root.join(&location.latest_version);
    let mut languages = Vec::new();
    for dir in list_language_dirs(&version_dir)? {
        let directory = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let files = list_xml_files(&dir)?.len();
        languages.push(LanguageSummary {
            primary: directory == location.primary_language.as_str(),
            language: Language::new(&directory).ok(),
            directory,
            files,
        });
    }
    Ok(languages)
}

fn load_settings(config: Option<&Path>, overrides: Settings) -> Result<Settings> {
    let base = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    Ok(base.merge(overrides))
}

fn summarize_datasets(store: &DatasetStore) -> Vec<DatasetSummary> {
    store
        .datasets()
        .map(|(name, dataset)| {
            let mut languages = BTreeSet::new();
            let mut categorical = 0;
            for variable in dataset.variables() {
                if variable.is_categorical() {
                    categorical += 1;
                }
                languages.extend(variable.translated_labels.keys().cloned());
                languages.extend(variable.categories.translated_languages().cloned());
            }
            DatasetSummary {
                name: name.to_string(),
                variables: dataset.len(),
                categorical,
                languages: languages.into_iter().collect(),
            }
        })
        .collect()
}
