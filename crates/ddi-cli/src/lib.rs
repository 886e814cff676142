//! Library components of the DDI converter command line tool.

pub mod logging;
pub mod settings;
