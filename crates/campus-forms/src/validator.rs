// File: src/validator.rs
// Purpose: Field validation engine bound to one form view

use std::collections::HashMap;

use campus_forms_validation::format_phone_number;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::antispam::{Clock, RenderStamp, SystemClock};
use crate::config::ValidatorConfig;
use crate::error::FieldError;
use crate::field::{Field, FieldKind};
use crate::rules::{check_field, RuleContext};
use crate::state::{SubmissionState, SubmitOutcome, Validity};
use crate::view::FormView;

/// Events a bound form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input(String),
    Blur(String),
    Submit,
}

/// Validation engine for a single form
///
/// Reads field snapshots from its [`FormView`], evaluates the rules and
/// writes the verdicts back. The displayed state of a field always reflects
/// the last run on its current value.
pub struct FormValidator<V, C = SystemClock> {
    view: V,
    clock: C,
    config: ValidatorConfig,
    stamp: RenderStamp,
    validity: HashMap<String, Validity>,
    state: SubmissionState,
    first_invalid: Option<String>,
}

impl<V: FormView> FormValidator<V, SystemClock> {
    pub fn new(view: V, config: ValidatorConfig) -> Self {
        Self::with_clock(view, config, SystemClock)
    }
}

impl<V: FormView, C: Clock> FormValidator<V, C> {
    /// Binds to `view`, capturing the render stamp from `clock`
    pub fn with_clock(view: V, config: ValidatorConfig, clock: C) -> Self {
        let stamp = RenderStamp::capture(&clock);
        debug!(stamp = stamp.millis(), "Form validator bound");
        Self {
            view,
            clock,
            config,
            stamp,
            validity: HashMap::new(),
            state: SubmissionState::Idle,
            first_invalid: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn stamp(&self) -> RenderStamp {
        self.stamp
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn validity(&self, name: &str) -> Validity {
        self.validity.get(name).cloned().unwrap_or_default()
    }

    /// Dispatch an event; only `Submit` yields an outcome
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Input(name) => {
                self.on_input(&name);
                None
            }
            FormEvent::Blur(name) => {
                self.validate_field(&name);
                None
            }
            FormEvent::Submit => Some(self.on_submit()),
        }
    }

    /// Live validation while typing
    pub fn on_input(&mut self, name: &str) {
        if name == self.config.phone_field {
            self.format_phone(name);
        }

        self.validate_field(name);

        // Keep the confirmation verdict in step with the password it mirrors
        let confirm = self.config.confirm_field.clone();
        if name == self.config.password_field && self.validity.contains_key(&confirm) {
            self.validate_field(&confirm);
        }
    }

    fn format_phone(&mut self, name: &str) {
        let Some(field) = self.view.field(name) else {
            return;
        };
        if field.kind != FieldKind::Tel {
            return;
        }
        let raw = field.value.as_text().unwrap_or("");
        let formatted = format_phone_number(raw);
        if formatted != raw {
            self.view.set_text(name, &formatted);
        }
    }

    /// Validates one field by name; a missing field counts as valid
    pub fn validate_field(&mut self, name: &str) -> bool {
        let fields = self.view.fields();
        let Some(field) = fields.iter().find(|f| f.name == name) else {
            return true;
        };
        if field.kind.is_button() {
            return true;
        }
        let result = check_field(field, &RuleContext::new(&self.config, &fields));
        self.apply(name, result)
    }

    /// Exhaustive pass over every field plus the terms and timing checks
    pub fn validate_form(&mut self) -> bool {
        self.first_invalid = None;
        self.view.clear_general_error();

        let fields = self.view.fields();
        let ctx = RuleContext::new(&self.config, &fields);
        let results: Vec<_> = fields
            .iter()
            .filter(|f| !f.name.is_empty() && !f.kind.is_button())
            .map(|f| (f.name.clone(), check_field(f, &ctx)))
            .collect();

        let mut valid = true;
        for (name, result) in results {
            if matches!(result, Err(FieldError::Spam)) {
                warn!(field = %name, "Honeypot field filled in");
            }
            valid &= self.apply(&name, result);
        }

        if let Some(terms) = fields.iter().find(|f| f.name == self.config.terms_field) {
            if terms.is_empty() {
                let name = terms.name.clone();
                self.apply(&name, Err(FieldError::TermsNotAccepted));
                valid = false;
            }
        }

        if let Err(err) = self.stamp.check(self.clock.now_ms(), self.config.min_fill_time_ms) {
            warn!(?err, "Form submitted before the minimum fill time");
            self.view.show_general_error(&err.to_string());
            valid = false;
        }

        valid
    }

    /// Submit handler: validate, then either show errors or start submitting
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            debug!(state = ?self.state, "Submit ignored");
            return SubmitOutcome::Ignored;
        }

        self.state = SubmissionState::Validating;
        if !self.validate_form() {
            self.state = SubmissionState::Idle;
            let invalid = self.validity.values().filter(|v| v.is_invalid()).count();
            info!(invalid, "Form submission rejected");
            self.show_form_errors();
            return SubmitOutcome::Rejected;
        }

        self.state = SubmissionState::Submitting;
        let busy_label = self.config.busy_label.clone();
        self.view.set_submitting(true, &busy_label);
        let data = Value::Object(self.form_data());
        info!(%data, "Form submitted successfully");

        SubmitOutcome::Accepted {
            delay_ms: self.config.success_delay_ms,
        }
    }

    /// Finishes an accepted submission after the simulated processing delay
    ///
    /// Returns false when no submission was in flight.
    pub fn complete_submission(&mut self) -> bool {
        if self.state != SubmissionState::Submitting {
            return false;
        }

        self.state = SubmissionState::Succeeded;
        self.view.show_success();

        if self.config.reset_on_success {
            self.reset();
        } else {
            let label = self.config.submit_label.clone();
            self.view.set_submitting(false, &label);
        }
        true
    }

    /// Restores initial values and clears every visual state
    pub fn reset(&mut self) {
        self.view.reset_values();
        self.view.clear_general_error();
        for field in self.view.fields() {
            self.view.clear_state(&field.name);
        }
        self.validity.clear();
        self.first_invalid = None;

        let label = self.config.submit_label.clone();
        self.view.set_submitting(false, &label);
    }

    /// Key/value record of the current values; buttons and unnamed controls left out
    pub fn form_data(&self) -> Map<String, Value> {
        self.view
            .fields()
            .iter()
            .filter(|f| !f.name.is_empty() && !f.kind.is_button())
            .map(|f: &Field| (f.name.clone(), f.value.to_json()))
            .collect()
    }

    fn show_form_errors(&mut self) {
        if let Some(name) = self.first_invalid.take() {
            self.view.focus(&name);
        }
    }

    fn apply(&mut self, name: &str, result: Result<(), FieldError>) -> bool {
        match result {
            Ok(()) => {
                self.view.mark_valid(name);
                self.validity.insert(name.to_string(), Validity::Valid);
                true
            }
            Err(err) => {
                debug!(field = %name, error = %err, "Field invalid");
                self.view.mark_invalid(name, &err.to_string());
                self.validity.insert(name.to_string(), Validity::Invalid(err));
                if self.first_invalid.is_none() {
                    self.first_invalid = Some(name.to_string());
                }
                false
            }
        }
    }
}
