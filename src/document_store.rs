// 📬 Document Store - HTTP forwarding of serialized records

use crate::error::IntakeError;
use std::time::Duration;

/// Overall timeout on document-store calls.
pub const DOCUMENT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Receives serialized records over HTTP.
pub trait DocumentStore {
    /// POST a record's JSON bytes to the given endpoint.
    fn post(&self, endpoint: &str, record: &[u8]) -> Result<(), IntakeError>;
}

/// Builds a document-store client once the account key is known.
///
/// The key only becomes available at runtime, after the vault hands it out,
/// so the orchestrator is given a factory rather than a finished client.
pub trait DocumentStoreFactory {
    fn connect(&self, account_key: &str) -> Box<dyn DocumentStore>;
}

/// HTTP implementation of [`DocumentStore`].
///
/// Authenticates with the master-key header scheme
/// (`Authorization: type=master&ver=1.0&sig={account_key}`) and treats any
/// non-success status as fatal.
pub struct HttpDocumentStore {
    http: reqwest::blocking::Client,
    account_key: String,
}

impl HttpDocumentStore {
    /// Create a client for the given account key.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(account_key: impl Into<String>) -> Self {
        HttpDocumentStore {
            http: reqwest::blocking::Client::builder()
                .timeout(DOCUMENT_STORE_TIMEOUT)
                .build()
                .expect("reqwest client should build"),
            account_key: account_key.into(),
        }
    }
}

impl DocumentStore for HttpDocumentStore {
    fn post(&self, endpoint: &str, record: &[u8]) -> Result<(), IntakeError> {
        let resp = self
            .http
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(
                reqwest::header::AUTHORIZATION,
                format!("type=master&ver=1.0&sig={}", self.account_key),
            )
            .body(record.to_vec())
            .send()?;

        if !resp.status().is_success() {
            return Err(IntakeError::DocumentStore {
                status: resp.status().as_u16(),
                message: resp.text().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

/// Default factory producing [`HttpDocumentStore`] clients.
pub struct HttpDocumentStoreFactory;

impl DocumentStoreFactory for HttpDocumentStoreFactory {
    fn connect(&self, account_key: &str) -> Box<dyn DocumentStore> {
        Box::new(HttpDocumentStore::new(account_key))
    }
}

// ============================================================================
// TESTS
// ============================================================================
