//! Feature Metadata Types

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTRUCTION OPTIONS
// ============================================================================

/// User-supplied feature metadata (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureMetadataOptions {
    /// Column that uniquely identifies a row or instance
    pub identity_feature_name: Option<String>,
    /// Timestamp column used for temporal ordering
    pub time_column_name: Option<String>,
    /// Accepted but not used yet
    pub categorical_features: Option<Vec<String>>,
    /// Columns dropped by the user during model training
    pub dropped_features: Option<Vec<String>>,
    /// Grouping key when the dataset holds several time series
    pub time_series_id_column_names: Option<Vec<String>>,
}

// ============================================================================
// FEATURE METADATA
// ============================================================================

/// Feature metadata for a tabular dataset.
///
/// Immutable once built. Check it against the dataset's columns with
/// [`FeatureMetadata::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureMetadata {
    pub(super) identity_feature_name: Option<String>,
    pub(super) time_column_name: Option<String>,
    pub(super) categorical_features: Option<Vec<String>>,
    pub(super) dropped_features: Option<Vec<String>>,
    pub(super) time_series_id_column_names: Option<Vec<String>>,
}

impl FeatureMetadata {
    /// Build metadata from user options.
    ///
    /// Logs a warning whenever categorical features are set, even to an
    /// empty list. They have no effect yet.
    pub fn new(options: FeatureMetadataOptions) -> Self {
        if let Some(categorical) = options.categorical_features.as_ref() {
            log::warn!(
                "categorical_features are not in use currently (got: [{}])",
                categorical.join(", ")
            );
        }

        Self {
            identity_feature_name: options.identity_feature_name,
            time_column_name: options.time_column_name,
            categorical_features: options.categorical_features,
            dropped_features: options.dropped_features,
            time_series_id_column_names: options.time_series_id_column_names,
        }
    }

    pub fn identity_feature_name(&self) -> Option<&str> {
        self.identity_feature_name.as_deref()
    }

    pub fn time_column_name(&self) -> Option<&str> {
        self.time_column_name.as_deref()
    }

    pub fn categorical_features(&self) -> Option<&[String]> {
        self.categorical_features.as_deref()
    }

    pub fn dropped_features(&self) -> Option<&[String]> {
        self.dropped_features.as_deref()
    }

    pub fn time_series_id_column_names(&self) -> Option<&[String]> {
        self.time_series_id_column_names.as_deref()
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Give back the options this metadata was built from
    pub fn into_options(self) -> FeatureMetadataOptions {
        FeatureMetadataOptions {
            identity_feature_name: self.identity_feature_name,
            time_column_name: self.time_column_name,
            categorical_features: self.categorical_features,
            dropped_features: self.dropped_features,
            time_series_id_column_names: self.time_series_id_column_names,
        }
    }
}

impl From<FeatureMetadataOptions> for FeatureMetadata {
    fn from(options: FeatureMetadataOptions) -> Self {
        Self::new(options)
    }
}
