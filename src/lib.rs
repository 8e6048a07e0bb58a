//! Feature Metadata
//!
//! Metadata describing the columns of a tabular dataset, validated against
//! the dataset's feature names before analysis starts.
//!
//! ```
//! use feature_metadata::{FeatureMetadata, FeatureMetadataOptions};
//!
//! let metadata = FeatureMetadata::new(FeatureMetadataOptions {
//!     identity_feature_name: Some("id".to_string()),
//!     dropped_features: Some(vec!["notes".to_string()]),
//!     ..Default::default()
//! });
//!
//! assert!(metadata.validate(&["id", "notes", "age"]).is_ok());
//! assert!(metadata.validate(&["age"]).is_err());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;

pub use config::{init_logging, Config};
pub use error::{MetadataError, MetadataResult};
pub use metadata::{ColumnPurpose, FeatureMetadata, FeatureMetadataOptions};
