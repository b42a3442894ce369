// File: src/view.rs
// Purpose: Seam between the validator and whatever renders the form

use std::collections::HashMap;

use crate::field::{Field, FieldValue};

/// Rendering surface a [`FormValidator`](crate::FormValidator) drives
///
/// Implemented over the live DOM in the WASM crate and in memory by
/// [`HeadlessForm`]. Fields are addressed by name.
pub trait FormView {
    /// Current snapshot of every control, in document order
    fn fields(&self) -> Vec<Field>;

    fn field(&self, name: &str) -> Option<Field> {
        self.fields().into_iter().find(|f| f.name == name)
    }

    /// Overwrite a text control's value (phone formatting)
    fn set_text(&mut self, name: &str, value: &str);

    /// Valid class on, invalid class and error message off
    fn mark_valid(&mut self, name: &str);

    /// Invalid class on, valid class off, error message shown
    fn mark_invalid(&mut self, name: &str, message: &str);

    /// Back to untouched: no classes, no message
    fn clear_state(&mut self, name: &str);

    /// Form-level banner, replacing any previous one
    fn show_general_error(&mut self, message: &str);

    fn clear_general_error(&mut self);

    fn focus(&mut self, name: &str);

    fn set_submitting(&mut self, busy: bool, label: &str);

    fn show_success(&mut self);

    /// Restore every control to its initial value
    fn reset_values(&mut self);
}

/// Visual state of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDisplay {
    pub valid_class: bool,
    pub invalid_class: bool,
    pub message: Option<String>,
}

/// In-memory form for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct HeadlessForm {
    initial: Vec<Field>,
    fields: Vec<Field>,
    display: HashMap<String, FieldDisplay>,
    banner: Option<String>,
    focused: Option<String>,
    submit_busy: bool,
    submit_label: String,
    successes: usize,
}

impl HeadlessForm {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            initial: fields.clone(),
            fields,
            submit_label: "Submit Application".to_string(),
            ..Self::default()
        }
    }

    /// Simulates the user changing a control. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value;
        }
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn display(&self, name: &str) -> FieldDisplay {
        self.display.get(name).cloned().unwrap_or_default()
    }

    /// Names of fields currently showing the invalid class, in form order
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| self.display.get(&f.name).is_some_and(|d| d.invalid_class))
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn submit_busy(&self) -> bool {
        self.submit_busy
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn success_count(&self) -> usize {
        self.successes
    }
}

impl FormView for HeadlessForm {
    fn fields(&self) -> Vec<Field> {
        self.fields.clone()
    }

    fn set_text(&mut self, name: &str, value: &str) {
        self.set_value(name, FieldValue::Text(value.to_string()));
    }

    fn mark_valid(&mut self, name: &str) {
        self.display.insert(
            name.to_string(),
            FieldDisplay {
                valid_class: true,
                invalid_class: false,
                message: None,
            },
        );
    }

    fn mark_invalid(&mut self, name: &str, message: &str) {
        self.display.insert(
            name.to_string(),
            FieldDisplay {
                valid_class: false,
                invalid_class: true,
                message: Some(message.to_string()),
            },
        );
    }

    fn clear_state(&mut self, name: &str) {
        self.display.remove(name);
    }

    fn show_general_error(&mut self, message: &str) {
        self.banner = Some(message.to_string());
    }

    fn clear_general_error(&mut self) {
        self.banner = None;
    }

    fn focus(&mut self, name: &str) {
        self.focused = Some(name.to_string());
    }

    fn set_submitting(&mut self, busy: bool, label: &str) {
        self.submit_busy = busy;
        self.submit_label = label.to_string();
    }

    fn show_success(&mut self) {
        self.successes += 1;
    }

    fn reset_values(&mut self) {
        self.fields = self.initial.clone();
    }
}
