//! Archive ingestion: file discovery, DDI XML reading and the datasets table.

pub mod datasets_table;
pub mod discovery;
pub mod error;
pub mod xml;

pub use datasets_table::{DatasetRow, DatasetsTable, TableCell, load_datasets_table};
pub use discovery::{
    ArchiveFiles, discover_archive, language_from_path, list_language_dirs, list_xml_files,
};
pub use error::{IngestError, Result};
pub use xml::{RawCategory, RawStatistic, RawVariable, parse_variables, read_variables};
