// File: src/config.rs
// Purpose: Validator configuration (TOML file or JSON data attribute)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Validator configuration
///
/// Every key is optional; a missing or empty source yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Submissions faster than this after render are rejected
    #[serde(default = "default_min_fill_time_ms")]
    pub min_fill_time_ms: u64,

    /// Artificial processing delay before the success message
    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u64,

    #[serde(default = "default_true")]
    pub reset_on_success: bool,

    #[serde(default = "default_honeypot_field")]
    pub honeypot_field: String,

    #[serde(default = "default_timestamp_field")]
    pub timestamp_field: String,

    #[serde(default = "default_terms_field")]
    pub terms_field: String,

    #[serde(default = "default_password_field")]
    pub password_field: String,

    #[serde(default = "default_confirm_field")]
    pub confirm_field: String,

    /// Field reformatted as `(ddd) ddd-dddd` while typing
    #[serde(default = "default_phone_field")]
    pub phone_field: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    #[serde(default = "default_busy_label")]
    pub busy_label: String,

    /// Forms bound automatically when the page loads
    #[serde(default = "default_form_ids")]
    pub form_ids: Vec<String>,
}

// Default values
fn default_min_fill_time_ms() -> u64 {
    2000
}

fn default_success_delay_ms() -> u64 {
    1500
}

fn default_true() -> bool {
    true
}

fn default_honeypot_field() -> String {
    "website".to_string()
}

fn default_timestamp_field() -> String {
    "timestamp".to_string()
}

fn default_terms_field() -> String {
    "terms".to_string()
}

fn default_password_field() -> String {
    "password".to_string()
}

fn default_confirm_field() -> String {
    "confirmPassword".to_string()
}

fn default_phone_field() -> String {
    "phone".to_string()
}

fn default_submit_label() -> String {
    "Submit Application".to_string()
}

fn default_busy_label() -> String {
    "Submitting...".to_string()
}

fn default_form_ids() -> Vec<String> {
    vec![
        "registrationForm".to_string(),
        "contactForm".to_string(),
        "applicationForm".to_string(),
    ]
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_fill_time_ms: default_min_fill_time_ms(),
            success_delay_ms: default_success_delay_ms(),
            reset_on_success: true,
            honeypot_field: default_honeypot_field(),
            timestamp_field: default_timestamp_field(),
            terms_field: default_terms_field(),
            password_field: default_password_field(),
            confirm_field: default_confirm_field(),
            phone_field: default_phone_field(),
            submit_label: default_submit_label(),
            busy_label: default_busy_label(),
            form_ids: default_form_ids(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from JSON, e.g. a `data-validator-config` attribute
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content).context("Failed to parse validator config JSON")
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}
