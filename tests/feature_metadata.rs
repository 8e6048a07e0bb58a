//! End-to-end use of the public API: configure, validate, export.

use feature_metadata::{
    ColumnPurpose, Config, FeatureMetadata, FeatureMetadataOptions, MetadataError,
};
use serde_json::json;

fn dataset_columns() -> Vec<String> {
    ["customer_id", "signup_date", "plan", "churned", "free_text"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_metadata_from_user_config() {
    let options: FeatureMetadataOptions = serde_json::from_value(json!({
        "identity_feature_name": "customer_id",
        "time_column_name": "signup_date",
        "dropped_features": ["free_text"],
    }))
    .unwrap();

    let metadata = FeatureMetadata::new(options);
    assert!(metadata.validate(&dataset_columns()).is_ok());

    let exported = metadata.to_dict();
    assert_eq!(exported["identity_feature_name"], json!("customer_id"));
    assert_eq!(exported["dropped_features"], json!(["free_text"]));
    assert!(exported["datetime_features"].is_null());
}

#[test]
fn test_misconfigured_time_column_rejected() {
    let metadata = FeatureMetadata::new(FeatureMetadataOptions {
        time_column_name: Some("created_at".to_string()),
        ..Default::default()
    });

    let err = metadata.validate(&dataset_columns()).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::UserConfigValidation {
            purpose: ColumnPurpose::TimeColumn,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "The given time column created_at is not present in the provided features: \
         customer_id, signup_date, plan, churned, free_text."
    );
}

#[test]
fn test_metadata_shared_across_threads() {
    let metadata = std::sync::Arc::new(FeatureMetadata::new(FeatureMetadataOptions {
        identity_feature_name: Some("customer_id".to_string()),
        ..Default::default()
    }));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let metadata = metadata.clone();
            std::thread::spawn(move || metadata.validate(&dataset_columns()).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = Config::from_vars(|_| None);
    assert!(config.validate().is_ok());
}
