//! CLI argument definitions for the DDI converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use ddi_cli::settings::Settings;
use ddi_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ddi-convert",
    version,
    about = "Convert DDI codebook archives into per-dataset variable records",
    long_about = "Convert DDI codebook archives into per-dataset variable records.\n\n\
                  Reads <root>/<version>/<lang>/*.xml, builds one record per variable from the\n\
                  primary language, merges labels of all other languages and writes one JSON\n\
                  or YAML file per dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert the latest version of an archive.
    Convert(ConvertArgs),

    /// List the language directories of an archive version.
    Languages(LanguagesArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// TOML settings file; command line flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Known archive versions, comma separated.
    #[arg(long = "versions", value_name = "LIST", value_delimiter = ',')]
    pub versions: Option<Vec<String>>,

    /// Datasets table with analysis unit, sub type, boost and period per dataset
    /// (default: ddionrails/datasets.csv when present).
    #[arg(long = "datasets-csv", value_name = "PATH", conflicts_with = "no_datasets_csv")]
    pub datasets_csv: Option<PathBuf>,

    /// Do not enrich records from a datasets table.
    #[arg(long = "no-datasets-csv")]
    pub no_datasets_csv: bool,

    /// Output file format (default: json).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Output directory for dataset files
    /// (default: ddionrails/datasets for json, temp/datasets for yaml).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Match translated category labels by value instead of by position.
    #[arg(long = "align-by-value")]
    pub align_by_value: bool,

    /// Convert and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct LanguagesArgs {
    /// TOML settings file; command line flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub archive: ArchiveArgs,
}

/// Options locating the archive, shared by all subcommands.
#[derive(Args)]
pub struct ArchiveArgs {
    /// Study identifier written into every record.
    #[arg(long = "study", value_name = "ID")]
    pub study: Option<String>,

    /// Archive root directory (default: r2ddi).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Version to convert (default: the last known version).
    #[arg(long = "latest-version", value_name = "VERSION")]
    pub latest_version: Option<String>,

    /// Language whose files define the records (default: en).
    #[arg(long = "primary-language", value_name = "LANG")]
    pub primary_language: Option<String>,
}

impl ArchiveArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            study: self.study.clone(),
            root: self.root.clone(),
            latest_version: self.latest_version.clone(),
            primary_language: self.primary_language.clone(),
            ..Settings::default()
        }
    }
}

impl ConvertArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            versions: self.versions.clone(),
            datasets_csv: self.datasets_csv.clone(),
            no_datasets_csv: self.no_datasets_csv.then_some(true),
            format: self.format.map(OutputFormat::from),
            output_dir: self.output_dir.clone(),
            align_by_value: self.align_by_value.then_some(true),
            ..self.archive.to_settings()
        }
    }
}

/// CLI output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
