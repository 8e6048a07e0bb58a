//! Metadata Module - Dataset Feature Metadata
//!
//! Describes which columns of a tabular dataset carry identity, time,
//! categorical, dropped and time-series grouping roles, and checks those
//! names against the dataset's actual columns.

pub mod types;
pub mod validate;
pub mod export;


pub use types::{FeatureMetadata, FeatureMetadataOptions};
pub use validate::ColumnPurpose;
