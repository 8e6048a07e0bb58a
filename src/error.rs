//! Error handling

use thiserror::Error;

use crate::metadata::ColumnPurpose;

pub type MetadataResult<T> = Result<T, MetadataError>;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// A configured column is missing from the dataset's feature names
    #[error(
        "The given {purpose} {column} is not present in the provided features: {}.",
        .feature_names.join(", ")
    )]
    UserConfigValidation {
        purpose: ColumnPurpose,
        column: String,
        feature_names: Vec<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MetadataError {
    /// Role of the offending column, for validation errors
    pub fn purpose(&self) -> Option<ColumnPurpose> {
        match self {
            MetadataError::UserConfigValidation { purpose, .. } => Some(*purpose),
            _ => None,
        }
    }

    /// Name of the offending column, for validation errors
    pub fn column(&self) -> Option<&str> {
        match self {
            MetadataError::UserConfigValidation { column, .. } => Some(column.as_str()),
            _ => None,
        }
    }
}
