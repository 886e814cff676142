//! Output generation for converted DDI datasets.

mod format;
mod writer;

pub use format::{DEFAULT_OUTPUT_DIR, DEFAULT_YAML_OUTPUT_DIR, OutputFormat};
pub use writer::{
    dataset_to_json, dataset_to_yaml, write_json_outputs, write_outputs, write_yaml_outputs,
};
