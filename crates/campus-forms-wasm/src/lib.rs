//! Campus Forms WASM
//!
//! WebAssembly bindings for the college website's forms.
//! Binds a [`FormValidator`] to each configured form on load and exposes the
//! pure predicates to JavaScript.

mod console;
mod dom;
mod interactive;
mod navigation;

use std::cell::RefCell;
use std::rc::Rc;

use campus_forms::{
    Clock, Field, FieldKind, FormEvent, FormValidator, RuleContext, SubmitOutcome, ValidatorConfig,
};
use campus_forms_validation as predicates;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

pub use dom::DomForm;
pub use navigation::{insert_skip_link, mark_active_links};

type SharedValidator = Rc<RefCell<FormValidator<DomForm, BrowserClock>>>;

/// `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// Module entry point: panic hook, console logging, auto-bound forms, widgets
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::init_logging();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(|| {
            if let Err(err) = setup_page() {
                tracing::error!(error = ?err, "Page setup failed");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    } else {
        setup_page()
    }
}

fn setup_page() -> Result<(), JsValue> {
    attach_all(&ValidatorConfig::default().form_ids);

    if let Err(err) = navigation::init() {
        tracing::warn!(error = ?err, "Navigation setup failed");
    }
    if let Err(err) = interactive::init() {
        tracing::warn!(error = ?err, "Interactive widgets setup failed");
    }
    Ok(())
}

/// Binds every listed form that exists, returning how many were bound
///
/// A form that fails to bind is logged and skipped; the others still bind.
pub fn attach_all(form_ids: &[String]) -> usize {
    form_ids
        .iter()
        .filter(|form_id| match attach_validator(form_id) {
            Ok(bound) => bound,
            Err(err) => {
                tracing::warn!(form_id = %form_id, error = ?err, "Form validator not attached");
                false
            }
        })
        .count()
}

/// Timer delays saturate at `u32::MAX` ms instead of wrapping
fn timer_delay(delay_ms: u64) -> u32 {
    u32::try_from(delay_ms).unwrap_or(u32::MAX)
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

/// Binds a validator to the form with the given id
///
/// A `data-validator-config` JSON attribute on the form overrides defaults.
/// Returns `false` when the page has no such form.
#[wasm_bindgen(js_name = attachValidator)]
pub fn attach_validator(form_id: &str) -> Result<bool, JsValue> {
    let document = dom::document()?;
    let Some(element) = document.get_element_by_id(form_id) else {
        return Ok(false);
    };
    let form: HtmlFormElement = element.dyn_into()?;

    let config = match form.get_attribute("data-validator-config") {
        Some(json) => ValidatorConfig::from_json(&json).map_err(to_js)?,
        None => ValidatorConfig::default(),
    };

    let validator = FormValidator::with_clock(DomForm::new(form.clone()), config, BrowserClock);
    validator
        .view()
        .inject_anti_spam(validator.config(), validator.stamp())?;
    let validator: SharedValidator = Rc::new(RefCell::new(validator));

    listen(&form, "input", &validator, |event| {
        event_control(event).map(FormEvent::Input)
    })?;
    listen(&form, "focusout", &validator, |event| {
        event_control(event).map(FormEvent::Blur)
    })?;
    listen(&form, "submit", &validator, |event| {
        event.prevent_default();
        Some(FormEvent::Submit)
    })?;

    tracing::info!(form_id, "Form validator attached");
    Ok(true)
}

fn event_control(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| dom::control_name(&element))
}

fn listen(
    form: &HtmlFormElement,
    event_type: &str,
    validator: &SharedValidator,
    to_event: fn(&Event) -> Option<FormEvent>,
) -> Result<(), JsValue> {
    let validator = Rc::clone(validator);
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(form_event) = to_event(&event) else {
            return;
        };
        // Focus moves during rendering raise nested events; the outer one wins
        let Ok(mut engine) = validator.try_borrow_mut() else {
            tracing::debug!(event = ?form_event, "Nested form event skipped");
            return;
        };
        if let Some(SubmitOutcome::Accepted { delay_ms }) = engine.handle(form_event) {
            let validator = Rc::clone(&validator);
            Timeout::new(timer_delay(delay_ms), move || {
                validator.borrow_mut().complete_submission();
            })
            .forget();
        }
    });
    form.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Validate a single value without a bound form
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('email', 'email', 'user@example.com', true);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(name: &str, kind: &str, value: &str, required: bool) -> Result<JsValue, JsValue> {
    let config = ValidatorConfig::default();
    let mut field = Field::text(name, FieldKind::parse(kind), value);
    field.required = required;

    let errors: Vec<ValidationError> = campus_forms::check_field(&field, &RuleContext::new(&config, &[]))
        .err()
        .map(|err| ValidationError {
            field: name.to_string(),
            message: err.to_string(),
        })
        .into_iter()
        .collect();

    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    predicates::is_valid_email(email)
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(phone: &str) -> bool {
    predicates::is_valid_phone(phone)
}

/// Returns the policy message when the password is too weak
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str) -> Option<String> {
    predicates::validate_password(password).err()
}

#[wasm_bindgen(js_name = formatPhoneNumber)]
pub fn format_phone_number_js(raw: &str) -> String {
    predicates::format_phone_number(raw)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_phone_validation() {
        assert!(is_valid_phone_js("(555) 123-4567"));
        assert!(!is_valid_phone_js("0555"));
        assert_eq!(format_phone_number_js("5551234567"), "(555) 123-4567");
    }

    #[wasm_bindgen_test]
    fn test_password_validation() {
        assert!(validate_password_js("Abcdef12").is_none());
        assert!(validate_password_js("short1").is_some());
    }

    #[wasm_bindgen_test]
    fn test_timer_delay_saturates() {
        assert_eq!(timer_delay(1500), 1500);
        assert_eq!(timer_delay(u64::from(u32::MAX)), u32::MAX);
        assert_eq!(timer_delay(u64::from(u32::MAX) + 1), u32::MAX);
    }

    #[wasm_bindgen_test]
    fn test_validate_field_reports_errors() {
        let errors: Vec<ValidationError> =
            serde_wasm_bindgen::from_value(validate_field("email", "email", "", true).unwrap()).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "This field is required");

        let errors: Vec<ValidationError> =
            serde_wasm_bindgen::from_value(validate_field("email", "email", "a@b.co", true).unwrap()).unwrap();
        assert!(errors.is_empty());
    }
}
