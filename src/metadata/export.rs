use serde_json::{json, Map, Value};

use super::types::FeatureMetadata;
use crate::constants::{
    KEY_CATEGORICAL_FEATURES, KEY_DATETIME_FEATURES, KEY_DROPPED_FEATURES,
    KEY_IDENTITY_FEATURE_NAME,
};
use crate::error::MetadataResult;

impl FeatureMetadata {
    /// Plain mapping of the metadata, keyed the way the dashboard reads it.
    ///
    /// `datetime_features` is always null: the time column is a single
    /// timestamp and is not reported as a datetime feature list.
    /// Time series ID columns are not part of the mapping.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(
            KEY_IDENTITY_FEATURE_NAME.to_string(),
            json!(self.identity_feature_name),
        );
        dict.insert(KEY_DATETIME_FEATURES.to_string(), Value::Null);
        dict.insert(
            KEY_CATEGORICAL_FEATURES.to_string(),
            json!(self.categorical_features),
        );
        dict.insert(KEY_DROPPED_FEATURES.to_string(), json!(self.dropped_features));
        dict
    }

    /// `to_dict` rendered as a JSON string
    pub fn to_json(&self) -> MetadataResult<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }
}
