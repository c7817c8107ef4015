// 🗄️ State Store - key/value persistence through the sidecar save API

use crate::error::IntakeError;
use serde_json::json;
use std::collections::HashMap;

/// Key/value persistence for serialized records.
pub trait StateStore {
    /// Save a serialized record under `key` in the named store.
    ///
    /// `value` must be the record's JSON bytes. Metadata is passed through
    /// to the store as-is (this system always sends an empty mapping).
    fn save(
        &self,
        store: &str,
        key: &str,
        value: &[u8],
        metadata: &HashMap<String, String>,
    ) -> Result<(), IntakeError>;
}

/// HTTP client for a sidecar state API.
///
/// Saves go to `POST {base_url}/v1.0/state/{store}` as a one-element batch
/// of `{key, value, metadata}` entries.
pub struct SidecarStateStore {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SidecarStateStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        SidecarStateStore {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl StateStore for SidecarStateStore {
    fn save(
        &self,
        store: &str,
        key: &str,
        value: &[u8],
        metadata: &HashMap<String, String>,
    ) -> Result<(), IntakeError> {
        // The sidecar wants the value embedded as JSON, not as an opaque blob.
        let value: serde_json::Value =
            serde_json::from_slice(value).map_err(|source| IntakeError::Serialization {
                context: format!("state entry for key '{}'", key),
                source,
            })?;

        let entries = json!([{
            "key": key,
            "value": value,
            "metadata": metadata,
        }]);

        let url = format!("{}/v1.0/state/{}", self.base_url, store);
        let resp = self.http.post(&url).json(&entries).send()?;

        if !resp.status().is_success() {
            return Err(IntakeError::Store {
                key: key.to_string(),
                status: resp.status().as_u16(),
                message: resp.text().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
