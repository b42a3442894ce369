// File: src/field.rs
// Purpose: Snapshot of one form control as the validator sees it

use campus_forms_validation::is_blank;
use serde::{Deserialize, Serialize};

/// The `type` of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Checkbox,
    Radio,
    Hidden,
    Select,
    Textarea,
    Submit,
    Button,
    Other,
}

impl FieldKind {
    /// Parse an HTML `type` attribute (or tag name for select/textarea)
    ///
    /// # Examples
    /// ```
    /// use campus_forms::FieldKind;
    /// assert_eq!(FieldKind::parse("EMAIL"), FieldKind::Email);
    /// assert_eq!(FieldKind::parse("date"), FieldKind::Other);
    /// ```
    pub fn parse(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "text" | "" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "password" => FieldKind::Password,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "hidden" => FieldKind::Hidden,
            "select" | "select-one" | "select-multiple" => FieldKind::Select,
            "textarea" => FieldKind::Textarea,
            "submit" => FieldKind::Submit,
            "button" | "reset" => FieldKind::Button,
            _ => FieldKind::Other,
        }
    }

    /// Checkboxes and radios carry a checked flag instead of text
    pub fn is_toggle(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Buttons are never validated nor part of the submitted record
    pub fn is_button(self) -> bool {
        matches!(self, FieldKind::Submit | FieldKind::Button)
    }
}

/// Current value of a control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty means blank after trimming, or unchecked
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => is_blank(text),
            FieldValue::Checked(checked) => !checked,
        }
    }

    /// Trimmed text, `None` for toggles
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.trim()),
            FieldValue::Checked(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(text) => serde_json::Value::String(text.trim().to_string()),
            FieldValue::Checked(checked) => serde_json::Value::Bool(*checked),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A named, typed control and its current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    #[serde(default)]
    pub required: bool,
}

impl Field {
    /// A text-like control (text, email, tel, password, select, textarea...)
    pub fn text(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: FieldValue::Text(value.into()),
            required: false,
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Checkbox,
            value: FieldValue::Checked(checked),
            required: false,
        }
    }

    /// Builder-style `required` flag
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Trimmed text value, empty for toggles
    pub fn trimmed(&self) -> &str {
        self.value.as_text().unwrap_or("")
    }
}
