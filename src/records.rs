// 📇 Party Records - Immutable value records
// Two record kinds, no identity beyond their content

use crate::error::IntakeError;
use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD KIND
// ============================================================================

/// The two record kinds this system knows about.
///
/// The kind doubles as the state-store key for the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Individual,
    Organization,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Individual => "individual",
            RecordKind::Organization => "organization",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RECORD TYPES
// ============================================================================

/// A natural person: name plus an 11-character personal number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub name: String,

    #[serde(rename = "personalNumber")]
    pub personal_number: String,
}

impl Individual {
    pub fn new(name: impl Into<String>, personal_number: impl Into<String>) -> Self {
        Individual {
            name: name.into(),
            personal_number: personal_number.into(),
        }
    }
}

/// A registered organization: name plus an organization number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,

    #[serde(rename = "orgNumber")]
    pub org_number: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, org_number: impl Into<String>) -> Self {
        Organization {
            name: name.into(),
            org_number: org_number.into(),
        }
    }
}

// ============================================================================
// RECORD (either kind)
// ============================================================================

/// Either record kind, so the orchestrator can drive both through one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Individual(Individual),
    Organization(Organization),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Individual(_) => RecordKind::Individual,
            Record::Organization(_) => RecordKind::Organization,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Individual(ind) => &ind.name,
            Record::Organization(org) => &org.name,
        }
    }

    /// Serialize to the JSON wire shape.
    ///
    /// Serialization is deterministic: the same record always produces
    /// byte-identical output.
    pub fn to_json(&self) -> Result<Vec<u8>, IntakeError> {
        let bytes = match self {
            Record::Individual(ind) => serde_json::to_vec(ind),
            Record::Organization(org) => serde_json::to_vec(org),
        };

        bytes.map_err(|source| IntakeError::Serialization {
            context: format!("{} record", self.kind()),
            source,
        })
    }
}

impl From<Individual> for Record {
    fn from(ind: Individual) -> Self {
        Record::Individual(ind)
    }
}

impl From<Organization> for Record {
    fn from(org: Organization) -> Self {
        Record::Organization(org)
    }
}

// ============================================================================
// TESTS
// ============================================================================
