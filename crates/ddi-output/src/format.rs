use std::fmt;

use serde::Deserialize;

/// Default JSON output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "ddionrails/datasets";
/// Default YAML output directory, relative to the working directory.
pub const DEFAULT_YAML_OUTPUT_DIR: &str = "temp/datasets";

/// File format of the per-dataset output files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn default_dir(self) -> &'static str {
        match self {
            Self::Json => DEFAULT_OUTPUT_DIR,
            Self::Yaml => DEFAULT_YAML_OUTPUT_DIR,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
