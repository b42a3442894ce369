// File: src/error.rs
// Purpose: User-facing validation failures

use thiserror::Error;

/// Why a single field failed validation
///
/// The `Display` text is exactly what the user sees next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Password must be at least 8 characters with letters and numbers")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Honeypot filled in. Kept generic on purpose; the field is hidden anyway.
    #[error("Spam detected")]
    Spam,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Failures that belong to the whole form rather than one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form submitted too quickly. Please try again.")]
    SubmittedTooFast { elapsed_ms: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_forms_validation::PASSWORD_POLICY;

    #[test]
    fn test_password_message_matches_policy() {
        assert_eq!(FieldError::WeakPassword.to_string(), PASSWORD_POLICY);
    }

    #[test]
    fn test_form_error_message() {
        let err = FormError::SubmittedTooFast { elapsed_ms: 150 };
        assert_eq!(err.to_string(), "Form submitted too quickly. Please try again.");
    }
}
