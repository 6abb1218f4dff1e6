//! Lead intake: the checks a submission must pass before it reaches the
//! diagnosis engine.

mod import;
mod validation;

pub use import::{ImportedLead, LeadImportError, LeadImporter, LeadRowError};
pub use validation::{parse_amount, parse_currency_input, validate, BusinessField, FieldViolation};

use crate::diagnosis::BusinessInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Diagnostic form as submitted by a prospective client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub input: BusinessInput,
    /// Privacy consent checkbox; the form refuses to submit without it.
    #[serde(default)]
    pub consent_given: bool,
}

impl LeadSubmission {
    pub fn new(input: BusinessInput, consent_given: bool) -> Self {
        Self {
            input,
            consent_given,
        }
    }

    /// Releases the input to the engine once every check passes.
    pub fn accept(self) -> Result<BusinessInput, IntakeError> {
        validate(&self.input)?;
        if !self.consent_given {
            return Err(IntakeError::ConsentMissing);
        }

        debug!(
            creditor = self.input.main_creditor.id(),
            crisis = self.input.crisis_level.id(),
            "lead submission accepted"
        );
        Ok(self.input)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("submission rejected: {}", summarize(.violations))]
    Invalid { violations: Vec<FieldViolation> },
    #[error("consent to process the submitted data was not given")]
    ConsentMissing,
}

impl IntakeError {
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            IntakeError::Invalid { violations } => violations.as_slice(),
            IntakeError::ConsentMissing => &[],
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{} ({})", violation.message, violation.field.label()))
        .collect::<Vec<_>>()
        .join("; ")
}
