//! Per-dataset output files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ddi_model::{Dataset, DatasetStore};
use tracing::{debug, info};

use crate::format::OutputFormat;

/// Serializes one dataset as pretty-printed JSON (two-space indentation).
pub fn dataset_to_json(dataset: &Dataset) -> Result<String> {
    serde_json::to_string_pretty(dataset).context("failed to serialize dataset as JSON")
}

/// Serializes one dataset as block-style YAML.
pub fn dataset_to_yaml(dataset: &Dataset) -> Result<String> {
    serde_yaml::to_string(dataset).context("failed to serialize dataset as YAML")
}

pub fn write_json_outputs(store: &DatasetStore, output_dir: &Path) -> Result<Vec<PathBuf>> {
    write_outputs(store, output_dir, OutputFormat::Json)
}

pub fn write_yaml_outputs(store: &DatasetStore, output_dir: &Path) -> Result<Vec<PathBuf>> {
    write_outputs(store, output_dir, OutputFormat::Yaml)
}

/// Writes `<output_dir>/<dataset>.<ext>` for every dataset of `store`.
///
/// Files with the same extension left over from an earlier run are removed first; other
/// files in the directory are kept.
pub fn write_outputs(
    store: &DatasetStore,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    remove_stale_outputs(output_dir, format)?;

    let mut outputs = Vec::with_capacity(store.dataset_count());
    for (name, dataset) in store.datasets() {
        let file_name = format!("{}.{}", checked_file_stem(name)?, format.extension());
        let path = output_dir.join(file_name);
        write_dataset(dataset, &path, format)?;
        debug!(path = %path.display(), variables = dataset.len(), "wrote dataset");
        outputs.push(path);
    }
    info!(
        output_dir = %output_dir.display(),
        %format,
        files = outputs.len(),
        "output complete"
    );
    Ok(outputs)
}

fn write_dataset(dataset: &Dataset, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, dataset)
            .with_context(|| format!("failed to write {}", path.display()))?,
        OutputFormat::Yaml => serde_yaml::to_writer(&mut writer, dataset)
            .with_context(|| format!("failed to write {}", path.display()))?,
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

fn remove_stale_outputs(output_dir: &Path, format: OutputFormat) -> Result<()> {
    let entries = std::fs::read_dir(output_dir)
        .with_context(|| format!("failed to read output directory {}", output_dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read output directory {}", output_dir.display()))?
            .path();
        let is_stale = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));
        if is_stale && path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove stale output {}", path.display()))?;
        }
    }
    Ok(())
}

/// Dataset names become file names, so they must stay a single path component.
fn checked_file_stem(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
    {
        bail!("dataset name '{name}' cannot be used as a file name");
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_like_dataset_names() {
        assert!(checked_file_stem("persons").is_ok());
        assert!(checked_file_stem("").is_err());
        assert!(checked_file_stem("..").is_err());
        assert!(checked_file_stem("a/b").is_err());
        assert!(checked_file_stem("a\\b").is_err());
    }

    #[test]
    fn format_names_and_directories() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert_eq!(OutputFormat::Json.default_dir(), "ddionrails/datasets");
        assert_eq!(OutputFormat::Yaml.default_dir(), "temp/datasets");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }
}
