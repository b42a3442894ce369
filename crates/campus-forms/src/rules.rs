// File: src/rules.rs
// Purpose: Per-field rules as pure functions over field snapshots

use campus_forms_validation::{is_blank, is_valid_email, is_valid_phone, validate_password};

use crate::config::ValidatorConfig;
use crate::error::FieldError;
use crate::field::{Field, FieldKind};

/// Values a field rule may look at besides the field itself
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a ValidatorConfig,
    /// Trimmed value of the password field, if the form has one
    pub password: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a ValidatorConfig, fields: &'a [Field]) -> Self {
        let password = fields
            .iter()
            .find(|f| f.name == config.password_field)
            .map(Field::trimmed);
        Self { config, password }
    }
}

/// Runs every rule for one field, stopping at the first failure
///
/// Order: required, optional-empty pass-through, type checks, name checks.
pub fn check_field(field: &Field, ctx: &RuleContext<'_>) -> Result<(), FieldError> {
    if field.is_empty() {
        return if field.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    check_kind(field)?;
    check_named(field, ctx)
}

fn check_kind(field: &Field) -> Result<(), FieldError> {
    let value = field.trimmed();
    match field.kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        FieldKind::Password if validate_password(value).is_err() => Err(FieldError::WeakPassword),
        _ => Ok(()),
    }
}

fn check_named(field: &Field, ctx: &RuleContext<'_>) -> Result<(), FieldError> {
    let config = ctx.config;

    if field.name == config.confirm_field {
        // Only compared once both sides hold something
        if let Some(password) = ctx.password.filter(|p| !is_blank(p)) {
            if field.trimmed() != password {
                return Err(FieldError::PasswordMismatch);
            }
        }
    } else if field.name == config.honeypot_field {
        // Reaching here means the honeypot is non-empty
        return Err(FieldError::Spam);
    }

    Ok(())
}
