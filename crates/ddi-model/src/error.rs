use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid language code '{code}': expected two letters or digits")]
    InvalidLanguage { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
