//! Conversion of DDI codebook archives into per-dataset variable records.

pub mod builder;
pub mod categories;
pub mod config;
pub mod converter;
pub mod enrich;
pub mod error;
pub mod statistics;
pub mod translate;

pub use builder::build_variable;
pub use categories::normalize_categories;
pub use config::{ConvertConfig, TranslationAlignment};
pub use converter::{ArchiveConverter, ConversionReport, TranslationIssue};
pub use enrich::{enrichment_for, format_period};
pub use error::{CategoryError, CoreError, Result};
pub use statistics::extract_statistics;
pub use translate::merge_translation;
