// 🔑 Secret Provider - named secrets from a vault

use crate::error::IntakeError;
use serde::Deserialize;

/// Fetches named secrets from a vault.
pub trait SecretProvider {
    fn get_secret(&self, vault: &str, name: &str) -> Result<String, IntakeError>;
}

/// Response body of a secret read.
#[derive(Debug, Deserialize)]
struct SecretBundle {
    value: String,
}

/// HTTP client for a key-vault style secret API.
///
/// Reads `GET {vault_url}/secrets/{name}?api-version=7.4` with a bearer
/// token. The vault URL is derived from the vault name
/// (`https://{vault}.vault.azure.net`); tests and local emulators can
/// override it wholesale.
pub struct VaultClient {
    http: reqwest::blocking::Client,
    access_token: String,
    endpoint_override: Option<String>,
}

impl VaultClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        VaultClient {
            http: reqwest::blocking::Client::new(),
            access_token: access_token.into(),
            endpoint_override: None,
        }
    }

    /// Point the client at a fixed endpoint instead of the per-vault URL.
    pub fn with_endpoint(access_token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        VaultClient {
            http: reqwest::blocking::Client::new(),
            access_token: access_token.into(),
            endpoint_override: Some(endpoint.into().trim_end_matches('/').to_string()),
        }
    }

    fn vault_url(&self, vault: &str) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.vault.azure.net", vault),
        }
    }
}

impl SecretProvider for VaultClient {
    fn get_secret(&self, vault: &str, name: &str) -> Result<String, IntakeError> {
        let url = format!("{}/secrets/{}?api-version=7.4", self.vault_url(vault), name);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()?;

        if !resp.status().is_success() {
            return Err(IntakeError::Auth {
                vault: vault.to_string(),
                name: name.to_string(),
                message: format!(
                    "status {}: {}",
                    resp.status().as_u16(),
                    resp.text().unwrap_or_default()
                ),
            });
        }

        let bundle: SecretBundle = resp.json()?;
        Ok(bundle.value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
