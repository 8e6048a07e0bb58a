use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::FeatureMetadata;
use crate::constants::{
    PURPOSE_CATEGORICAL_FEATURE, PURPOSE_DROPPED_FEATURE, PURPOSE_IDENTITY_FEATURE,
    PURPOSE_TIME_COLUMN, PURPOSE_TIME_SERIES_ID_COLUMN,
};
use crate::error::{MetadataError, MetadataResult};

// ============================================================================
// COLUMN PURPOSE
// ============================================================================

/// Role a configured column plays in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPurpose {
    DroppedFeature,
    CategoricalFeature,
    IdentityFeature,
    TimeColumn,
    TimeSeriesIdColumn,
}

impl ColumnPurpose {
    /// Validation order. The first failure in this order is the one reported.
    pub const CHECK_ORDER: [ColumnPurpose; 5] = [
        ColumnPurpose::DroppedFeature,
        ColumnPurpose::CategoricalFeature,
        ColumnPurpose::IdentityFeature,
        ColumnPurpose::TimeColumn,
        ColumnPurpose::TimeSeriesIdColumn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColumnPurpose::DroppedFeature => PURPOSE_DROPPED_FEATURE,
            ColumnPurpose::CategoricalFeature => PURPOSE_CATEGORICAL_FEATURE,
            ColumnPurpose::IdentityFeature => PURPOSE_IDENTITY_FEATURE,
            ColumnPurpose::TimeColumn => PURPOSE_TIME_COLUMN,
            ColumnPurpose::TimeSeriesIdColumn => PURPOSE_TIME_SERIES_ID_COLUMN,
        }
    }
}

impl fmt::Display for ColumnPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn scalar_slice(field: &Option<String>) -> &[String] {
    field.as_ref().map(std::slice::from_ref).unwrap_or_default()
}

impl FeatureMetadata {
    /// Configured column names for one role.
    ///
    /// Scalar fields become a one-element slice so a name is always matched
    /// as a whole token.
    fn columns_for(&self, purpose: ColumnPurpose) -> &[String] {
        match purpose {
            ColumnPurpose::DroppedFeature => self.dropped_features.as_deref().unwrap_or_default(),
            ColumnPurpose::CategoricalFeature => {
                self.categorical_features.as_deref().unwrap_or_default()
            }
            ColumnPurpose::IdentityFeature => scalar_slice(&self.identity_feature_name),
            ColumnPurpose::TimeColumn => scalar_slice(&self.time_column_name),
            ColumnPurpose::TimeSeriesIdColumn => self
                .time_series_id_column_names
                .as_deref()
                .unwrap_or_default(),
        }
    }

    /// Every configured column with its role, in validation order
    pub fn configured_columns(&self) -> impl Iterator<Item = (ColumnPurpose, &str)> + '_ {
        ColumnPurpose::CHECK_ORDER.into_iter().flat_map(move |purpose| {
            self.columns_for(purpose)
                .iter()
                .map(move |name| (purpose, name.as_str()))
        })
    }

    /// Check that every configured column exists in `feature_names`.
    ///
    /// Stops at the first missing column.
    pub fn validate<S: AsRef<str>>(&self, feature_names: &[S]) -> MetadataResult<()> {
        let known: HashSet<&str> = feature_names.iter().map(|name| name.as_ref()).collect();
        let mut checked = 0usize;

        for (purpose, column) in self.configured_columns() {
            if !known.contains(column) {
                log::warn!("Feature metadata rejected: {} '{}' not in dataset", purpose, column);
                return Err(MetadataError::UserConfigValidation {
                    purpose,
                    column: column.to_string(),
                    feature_names: feature_names
                        .iter()
                        .map(|name| name.as_ref().to_string())
                        .collect(),
                });
            }
            checked += 1;
        }

        log::debug!(
            "Feature metadata validated: {} columns against {} features",
            checked,
            feature_names.len()
        );
        Ok(())
    }
}
