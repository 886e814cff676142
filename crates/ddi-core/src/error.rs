//! Error types for the conversion pipeline.

use std::path::PathBuf;

use ddi_ingest::IngestError;
use ddi_model::ModelError;
use thiserror::Error;

/// Category values that cannot be ordered numerically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category value '{value}' is not numeric")]
    NonNumericValue { value: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("variable element without '{attribute}' attribute")]
    MissingAttribute { attribute: &'static str },

    #[error("categories of {dataset}/{variable}: {source}")]
    Categories {
        dataset: String,
        variable: String,
        #[source]
        source: CategoryError,
    },

    #[error("variable {dataset}/{variable} was not defined by the primary language")]
    UnknownVariable { dataset: String, variable: String },

    #[error("failed to convert {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<CoreError>,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
