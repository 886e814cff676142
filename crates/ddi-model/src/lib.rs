//! Records produced by the DDI codebook converter.

pub mod category;
pub mod error;
pub mod language;
pub mod statistics;
pub mod store;
pub mod variable;

pub use category::{Category, CategorySet};
pub use error::{ModelError, Result};
pub use language::Language;
pub use statistics::Statistics;
pub use store::{Dataset, DatasetStore};
pub use variable::{CATEGORICAL_SCALE, Enrichment, Variable};
