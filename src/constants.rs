//! Central Constants
//!
//! Column role labels, exported mapping keys and environment defaults.

// ============================================
// Column roles (used in validation messages)
// ============================================

pub const PURPOSE_DROPPED_FEATURE: &str = "dropped feature";
pub const PURPOSE_CATEGORICAL_FEATURE: &str = "categorical feature";
pub const PURPOSE_IDENTITY_FEATURE: &str = "identity feature";
pub const PURPOSE_TIME_COLUMN: &str = "time column";
pub const PURPOSE_TIME_SERIES_ID_COLUMN: &str = "time series ID column";

// ============================================
// Exported mapping keys
// ============================================

/// Keys produced by `FeatureMetadata::to_dict`, in output order
pub const KEY_IDENTITY_FEATURE_NAME: &str = "identity_feature_name";
pub const KEY_DATETIME_FEATURES: &str = "datetime_features";
pub const KEY_CATEGORICAL_FEATURES: &str = "categorical_features";
pub const KEY_DROPPED_FEATURES: &str = "dropped_features";

// ============================================
// Environment
// ============================================

/// Log filter env var (env_logger syntax)
pub const ENV_LOG_FILTER: &str = "FEATURE_METADATA_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";
