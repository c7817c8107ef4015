// ⚙️ Intake Configuration
// Everything the orchestrator needs, passed in explicitly - no ambient state

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Top-level configuration for an intake run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Sidecar state-store settings.
    pub state_store: StateStoreConfig,

    /// Vault + document-store export capability. `None` disables the
    /// export phase entirely.
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

/// Where and how records are saved through the sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateStoreConfig {
    /// Sidecar HTTP endpoint.
    pub base_url: String,

    /// State-store component name.
    pub store_name: String,
}

/// Settings for the vault + document-store export phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Vault name the credentials live in.
    pub vault: String,

    /// Access token for the vault itself. The binary fills this in
    /// (config file or environment); the library never resolves it.
    #[serde(default)]
    pub vault_token: String,

    /// Secret holding the API token.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,

    /// Secret holding the document-store account name.
    #[serde(default = "default_account_name_secret")]
    pub account_name_secret: String,

    /// Secret holding the document-store account key.
    #[serde(default = "default_account_key_secret")]
    pub account_key_secret: String,

    /// Document-store endpoint records are posted to.
    pub endpoint: String,
}

fn default_token_secret() -> String {
    "api-token".to_string()
}

fn default_account_name_secret() -> String {
    "docstore-account-name".to_string()
}

fn default_account_key_secret() -> String {
    "docstore-account-key".to_string()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        IntakeConfig {
            state_store: StateStoreConfig::default(),
            export: None,
        }
    }
}

impl Default for StateStoreConfig {
    fn default() -> Self {
        StateStoreConfig {
            base_url: "http://localhost:3500".to_string(),
            store_name: "statestore".to_string(),
        }
    }
}

impl IntakeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: IntakeConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        Ok(config)
    }
}

// ============================================================================
// TESTS
// ============================================================================
