// Party Intake - Core Library
// Exposes all modules for use in the CLI, the greeting server, and tests

pub mod config;
pub mod document_store;
pub mod error;
pub mod orchestrator;
pub mod records;
pub mod secrets;
pub mod state_store;
pub mod validation;

pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ExportConfig, IntakeConfig, StateStoreConfig};
pub use document_store::{
    DocumentStore, DocumentStoreFactory, HttpDocumentStore, HttpDocumentStoreFactory,
    DOCUMENT_STORE_TIMEOUT,
};
pub use error::IntakeError;
pub use orchestrator::{sample_records, Orchestrator, RunReport, SaveOutcome};
pub use records::{Individual, Organization, Record, RecordKind};
pub use secrets::{SecretProvider, VaultClient};
pub use state_store::{SidecarStateStore, StateStore};
pub use validation::{RecordValidator, ValidationError, ValidationResult, PERSONAL_NUMBER_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
