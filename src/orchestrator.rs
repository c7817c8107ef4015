// 🎬 Intake Orchestrator
// Validate the sample records, save them through the state store, and
// optionally export them to the document store with vault credentials

use crate::config::{ExportConfig, IntakeConfig};
use crate::document_store::DocumentStoreFactory;
use crate::error::IntakeError;
use crate::records::{Individual, Organization, Record, RecordKind};
use crate::secrets::SecretProvider;
use crate::state_store::StateStore;
use crate::validation::{RecordValidator, ValidationError};
use std::collections::HashMap;

/// Build the two fixed sample records every run works on.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::from(Individual::new("John Doe", "12345678901")),
        Record::from(Organization::new("Acme Corp", "ACME123")),
    ]
}

// ============================================================================
// RUN REPORT
// ============================================================================

/// Per-record result of the persistence step.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The record passed validation and was saved under `key`.
    Saved { key: String },

    /// The record failed validation and was skipped. Nothing was written.
    Rejected {
        kind: RecordKind,
        errors: Vec<ValidationError>,
    },
}

/// What a completed run did.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<SaveOutcome>,
    pub exported: usize,
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

/// Drives the intake sequence against injected collaborators.
///
/// Validation rejection skips the record and continues; every collaborator
/// error aborts the run at the point it occurred.
pub struct Orchestrator {
    config: IntakeConfig,
    validator: RecordValidator,
    state: Box<dyn StateStore>,
    secrets: Box<dyn SecretProvider>,
    documents: Box<dyn DocumentStoreFactory>,
}

impl Orchestrator {
    pub fn new(
        config: IntakeConfig,
        state: Box<dyn StateStore>,
        secrets: Box<dyn SecretProvider>,
        documents: Box<dyn DocumentStoreFactory>,
    ) -> Self {
        Orchestrator {
            config,
            validator: RecordValidator::new(),
            state,
            secrets,
            documents,
        }
    }

    /// Run the full sequence over the fixed sample records.
    pub fn run(&self) -> Result<RunReport, IntakeError> {
        let records = sample_records();

        let outcomes = self.persist(&records)?;

        let exported = match &self.config.export {
            Some(export) => self.export(export, &records)?,
            None => 0,
        };

        Ok(RunReport { outcomes, exported })
    }

    /// Validate each record and save the valid ones, keyed by record kind.
    pub fn persist(&self, records: &[Record]) -> Result<Vec<SaveOutcome>, IntakeError> {
        let metadata: HashMap<String, String> = HashMap::new();
        let mut outcomes = Vec::new();

        for record in records {
            let key = record.kind().as_str();

            match self.validator.validate(record) {
                Ok(()) => {
                    let body = record.to_json()?;
                    self.state.save(
                        &self.config.state_store.store_name,
                        key,
                        &body,
                        &metadata,
                    )?;
                    outcomes.push(SaveOutcome::Saved {
                        key: key.to_string(),
                    });
                }
                Err(errors) => {
                    outcomes.push(SaveOutcome::Rejected {
                        kind: record.kind(),
                        errors,
                    });
                }
            }
        }

        Ok(outcomes)
    }

    /// Fetch export credentials from the vault and post each valid record.
    ///
    /// Returns how many records were posted.
    pub fn export(&self, export: &ExportConfig, records: &[Record]) -> Result<usize, IntakeError> {
        // The API token and account name are provisioned alongside the key;
        // only the key is needed to open the client.
        let _token = self.secrets.get_secret(&export.vault, &export.token_secret)?;
        let _account_name = self
            .secrets
            .get_secret(&export.vault, &export.account_name_secret)?;
        let account_key = self
            .secrets
            .get_secret(&export.vault, &export.account_key_secret)?;

        let client = self.documents.connect(&account_key);

        let mut exported = 0;
        for record in records {
            if !record.is_valid() {
                continue;
            }

            let body = record.to_json()?;
            client.post(&export.endpoint, &body)?;
            exported += 1;
        }

        Ok(exported)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateStoreConfig;
    use crate::document_store::DocumentStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    // ------------------------------------------------------------------------
    // Recording doubles
    // ------------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    struct SaveCall {
        store: String,
        key: String,
        value: Vec<u8>,
        metadata: HashMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct RecordingStateStore {
        calls: Rc<RefCell<Vec<SaveCall>>>,
        fail_key: Option<String>,
    }

    impl StateStore for RecordingStateStore {
        fn save(
            &self,
            store: &str,
            key: &str,
            value: &[u8],
            metadata: &HashMap<String, String>,
        ) -> Result<(), IntakeError> {
            self.calls.borrow_mut().push(SaveCall {
                store: store.to_string(),
                key: key.to_string(),
                value: value.to_vec(),
                metadata: metadata.clone(),
            });

            if self.fail_key.as_deref() == Some(key) {
                return Err(IntakeError::Store {
                    key: key.to_string(),
                    status: 500,
                    message: "injected failure".to_string(),
                });
            }

            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct ScriptedSecrets {
        values: HashMap<String, String>,
        requested: Rc<RefCell<Vec<String>>>,
        fail_name: Option<String>,
    }

    impl SecretProvider for ScriptedSecrets {
        fn get_secret(&self, vault: &str, name: &str) -> Result<String, IntakeError> {
            self.requested.borrow_mut().push(name.to_string());

            if self.fail_name.as_deref() == Some(name) {
                return Err(IntakeError::Auth {
                    vault: vault.to_string(),
                    name: name.to_string(),
                    message: "injected failure".to_string(),
                });
            }

            Ok(self
                .values
                .get(name)
                .cloned()
                .unwrap_or_else(|| format!("value-of-{}", name)))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDocuments {
        connected_with: Rc<RefCell<Vec<String>>>,
        posts: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
    }

    struct RecordingDocumentStore {
        posts: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
    }

    impl DocumentStoreFactory for RecordingDocuments {
        fn connect(&self, account_key: &str) -> Box<dyn DocumentStore> {
            self.connected_with.borrow_mut().push(account_key.to_string());
            Box::new(RecordingDocumentStore {
                posts: Rc::clone(&self.posts),
            })
        }
    }

    impl DocumentStore for RecordingDocumentStore {
        fn post(&self, endpoint: &str, record: &[u8]) -> Result<(), IntakeError> {
            self.posts
                .borrow_mut()
                .push((endpoint.to_string(), record.to_vec()));
            Ok(())
        }
    }

    // ------------------------------------------------------------------------
    // Fixtures
    // ------------------------------------------------------------------------

    fn export_config() -> ExportConfig {
        ExportConfig {
            vault: "intake-vault".to_string(),
            vault_token: "vault-token".to_string(),
            token_secret: "api-token".to_string(),
            account_name_secret: "docstore-account-name".to_string(),
            account_key_secret: "docstore-account-key".to_string(),
            endpoint: "http://localhost:8081/docs".to_string(),
        }
    }

    fn orchestrator(
        export: Option<ExportConfig>,
        state: RecordingStateStore,
        secrets: ScriptedSecrets,
        documents: RecordingDocuments,
    ) -> Orchestrator {
        let config = IntakeConfig {
            state_store: StateStoreConfig::default(),
            export,
        };

        Orchestrator::new(
            config,
            Box::new(state),
            Box::new(secrets),
            Box::new(documents),
        )
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    #[test]
    fn test_run_saves_both_sample_records() {
        let state = RecordingStateStore::default();
        let calls = Rc::clone(&state.calls);

        let orch = orchestrator(
            None,
            state,
            ScriptedSecrets::default(),
            RecordingDocuments::default(),
        );
        let report = orch.run().unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(&report.outcomes[0], SaveOutcome::Saved { key } if key == "individual"));
        assert!(
            matches!(&report.outcomes[1], SaveOutcome::Saved { key } if key == "organization")
        );
        assert_eq!(report.exported, 0);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);

        assert_eq!(calls[0].store, "statestore");
        assert_eq!(calls[0].key, "individual");
        assert_eq!(
            calls[0].value,
            br#"{"name":"John Doe","personalNumber":"12345678901"}"#
        );
        assert!(calls[0].metadata.is_empty());

        assert_eq!(calls[1].key, "organization");
        assert_eq!(calls[1].value, br#"{"name":"Acme Corp","orgNumber":"ACME123"}"#);
        assert!(calls[1].metadata.is_empty());
    }

    #[test]
    fn test_invalid_individual_is_skipped_not_saved() {
        let state = RecordingStateStore::default();
        let calls = Rc::clone(&state.calls);

        let orch = orchestrator(
            None,
            state,
            ScriptedSecrets::default(),
            RecordingDocuments::default(),
        );

        // Ten characters instead of eleven
        let records = vec![
            Record::from(Individual::new("John Doe", "1234567890")),
            Record::from(Organization::new("Acme Corp", "ACME123")),
        ];
        let outcomes = orch.persist(&records).unwrap();

        match &outcomes[0] {
            SaveOutcome::Rejected { kind, errors } => {
                assert_eq!(*kind, RecordKind::Individual);
                assert!(errors.iter().any(|e| e.field == "personalNumber"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        // Only the organization reached the store
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].key, "organization");
    }

    #[test]
    fn test_save_error_aborts_before_next_record() {
        let state = RecordingStateStore {
            fail_key: Some("individual".to_string()),
            ..Default::default()
        };
        let calls = Rc::clone(&state.calls);

        let orch = orchestrator(
            None,
            state,
            ScriptedSecrets::default(),
            RecordingDocuments::default(),
        );
        let err = orch.run().unwrap_err();

        assert!(matches!(err, IntakeError::Store { .. }));

        // The organization save was never attempted
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].key, "individual");
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    #[test]
    fn test_run_with_export_fetches_secrets_and_posts() {
        let state = RecordingStateStore::default();
        let secrets = ScriptedSecrets {
            values: HashMap::from([(
                "docstore-account-key".to_string(),
                "key123".to_string(),
            )]),
            ..Default::default()
        };
        let requested = Rc::clone(&secrets.requested);
        let documents = RecordingDocuments::default();
        let connected_with = Rc::clone(&documents.connected_with);
        let posts = Rc::clone(&documents.posts);

        let orch = orchestrator(Some(export_config()), state, secrets, documents);
        let report = orch.run().unwrap();

        assert_eq!(report.exported, 2);

        // All three secrets, in provisioning order
        assert_eq!(
            *requested.borrow(),
            vec![
                "api-token".to_string(),
                "docstore-account-name".to_string(),
                "docstore-account-key".to_string(),
            ]
        );

        // The client was opened with the fetched account key
        assert_eq!(*connected_with.borrow(), vec!["key123".to_string()]);

        let posts = posts.borrow();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].0, "http://localhost:8081/docs");
        assert_eq!(
            posts[0].1,
            br#"{"name":"John Doe","personalNumber":"12345678901"}"#
        );
        assert_eq!(posts[1].1, br#"{"name":"Acme Corp","orgNumber":"ACME123"}"#);
    }

    #[test]
    fn test_secret_failure_aborts_export() {
        let secrets = ScriptedSecrets {
            fail_name: Some("api-token".to_string()),
            ..Default::default()
        };
        let documents = RecordingDocuments::default();
        let posts = Rc::clone(&documents.posts);

        let orch = orchestrator(
            Some(export_config()),
            RecordingStateStore::default(),
            secrets,
            documents,
        );
        let err = orch.run().unwrap_err();

        assert!(matches!(err, IntakeError::Auth { .. }));
        assert!(posts.borrow().is_empty());
    }

    #[test]
    fn test_invalid_records_are_not_exported() {
        let documents = RecordingDocuments::default();
        let posts = Rc::clone(&documents.posts);

        let orch = orchestrator(
            Some(export_config()),
            RecordingStateStore::default(),
            ScriptedSecrets::default(),
            documents,
        );

        let records = vec![
            Record::from(Individual::new("John Doe", "123")),
            Record::from(Organization::new("Acme Corp", "ACME123")),
        ];
        let exported = orch.export(&export_config(), &records).unwrap();

        assert_eq!(exported, 1);

        let posts = posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].1, br#"{"name":"Acme Corp","orgNumber":"ACME123"}"#);
    }

    #[test]
    fn test_sample_records_are_valid() {
        let records = sample_records();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_valid()));
        assert_eq!(records[0].kind(), RecordKind::Individual);
        assert_eq!(records[1].kind(), RecordKind::Organization);
    }
}
