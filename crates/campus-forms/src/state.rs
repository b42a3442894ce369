// File: src/state.rs
// Purpose: Field validity and form submission lifecycle

use crate::error::FieldError;

/// Outcome of the last validation run on a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl Validity {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Validity::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Where the form is in idle → validating → submitting → succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

impl SubmissionState {
    /// A new submit is accepted unless one is already in flight
    pub fn accepts_submit(self) -> bool {
        !matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

/// What the host should do after a submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight
    Ignored,
    /// Errors are on screen; the form is idle again
    Rejected,
    /// Call `complete_submission` once `delay_ms` has passed
    Accepted { delay_ms: u64 },
}
