//! Intake error types.

use thiserror::Error;

/// Errors that abort an intake run.
///
/// Validation rejection is deliberately absent: a record that fails
/// validation is skipped, not an error. Everything here is fatal to the run.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A secret could not be read from the vault.
    #[error("failed to read secret '{name}' from vault '{vault}': {message}")]
    Auth {
        /// Vault the secret was requested from.
        vault: String,
        /// Name of the requested secret.
        name: String,
        /// Error message or response body.
        message: String,
    },

    /// A record or request body could not be serialized.
    #[error("failed to serialize {context}: {source}")]
    Serialization {
        /// What was being serialized.
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP transport error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The state store rejected a save.
    #[error("state store save failed for key '{key}' ({status}): {message}")]
    Store {
        /// Key the save was attempted under.
        key: String,
        /// HTTP status code returned by the sidecar.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The document store rejected a posted record.
    #[error("document store returned {status}: {message}")]
    DocumentStore {
        /// HTTP status code returned by the document store.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}
