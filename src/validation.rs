// 📐 Record Validation
// Pure predicates plus per-field detail for rejection notices

use crate::records::{Individual, Organization, Record, RecordKind};

/// Required personal-number length, counted in characters.
///
/// Length is the only rule: content is not checked against a digit or
/// checksum scheme.
pub const PERSONAL_NUMBER_LEN: usize = 11;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// PURE PREDICATES
// ============================================================================

// The boolean predicates never fail; invalid input just returns false.
// They must agree with RecordValidator::validate at all times.

impl Individual {
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.personal_number.chars().count() == PERSONAL_NUMBER_LEN
    }
}

impl Organization {
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.org_number.is_empty()
    }
}

impl Record {
    pub fn is_valid(&self) -> bool {
        match self {
            Record::Individual(ind) => ind.is_valid(),
            Record::Organization(org) => org.is_valid(),
        }
    }
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Field-level validation for the two record kinds.
///
/// Same rules as the `is_valid` predicates, but each failed rule becomes a
/// [`ValidationError`] so callers can print a useful rejection notice.
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        RecordValidator
    }

    pub fn validate_individual(&self, ind: &Individual) -> ValidationResult {
        let mut errors = Vec::new();

        if ind.name.is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is empty".to_string(),
                context: RecordKind::Individual.as_str().to_string(),
            });
        }

        let len = ind.personal_number.chars().count();
        if len != PERSONAL_NUMBER_LEN {
            errors.push(ValidationError {
                field: "personalNumber".to_string(),
                message: format!(
                    "Must be exactly {} characters, got {}",
                    PERSONAL_NUMBER_LEN, len
                ),
                context: RecordKind::Individual.as_str().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn validate_organization(&self, org: &Organization) -> ValidationResult {
        let mut errors = Vec::new();

        if org.name.is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is empty".to_string(),
                context: RecordKind::Organization.as_str().to_string(),
            });
        }

        if org.org_number.is_empty() {
            errors.push(ValidationError {
                field: "orgNumber".to_string(),
                message: "Required field is empty".to_string(),
                context: RecordKind::Organization.as_str().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn validate(&self, record: &Record) -> ValidationResult {
        match record {
            Record::Individual(ind) => self.validate_individual(ind),
            Record::Organization(org) => self.validate_organization(org),
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
