//! Browser tests for the DOM-backed form view and page wiring
//!
//! Run with `wasm-pack test --headless --firefox crates/campus-forms-wasm`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use campus_forms::{FormValidator, ManualClock, SubmitOutcome, ValidatorConfig};
use campus_forms_wasm::{attach_all, insert_skip_link, mark_active_links, DomForm};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const RENDER_MS: i64 = 1_000_000;

const APPLICATION_FORM: &str = r#"
    <div class="row">
        <input type="text" name="firstName" required>
        <input type="text" name="lastName" required>
    </div>
    <div class="mb-3">
        <input type="email" name="email" required>
    </div>
    <div class="mb-3">
        <input type="tel" name="phone" required>
    </div>
    <div class="form-check">
        <input type="checkbox" name="terms" value="yes">
    </div>
    <button type="submit">Submit Application</button>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(id: &str, markup: &str) -> HtmlFormElement {
    let document = document();
    let form = document.create_element("form").unwrap();
    form.set_id(id);
    form.set_inner_html(markup);
    document.body().unwrap().append_child(&form).unwrap();
    form.dyn_into().unwrap()
}

fn bind(form: &HtmlFormElement) -> (FormValidator<DomForm, Rc<ManualClock>>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(RENDER_MS));
    let validator = FormValidator::with_clock(
        DomForm::new(form.clone()),
        ValidatorConfig::default(),
        Rc::clone(&clock),
    );
    validator
        .view()
        .inject_anti_spam(validator.config(), validator.stamp())
        .unwrap();
    (validator, clock)
}

fn control(form: &HtmlFormElement, name: &str) -> HtmlInputElement {
    form.query_selector(&format!("[name=\"{}\"]", name))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// The message node the control points at through `aria-describedby`
fn described_by(form: &HtmlFormElement, name: &str) -> Option<Element> {
    let id = control(form, name).get_attribute("aria-describedby")?;
    document().get_element_by_id(&id)
}

fn message(form: &HtmlFormElement, name: &str) -> Option<String> {
    described_by(form, name).and_then(|node| node.text_content())
}

#[wasm_bindgen_test]
fn test_invalid_controls_keep_their_own_messages() {
    let form = mount("dom-own-messages", APPLICATION_FORM);
    let (mut validator, clock) = bind(&form);
    clock.advance(5_000);
    control(&form, "email").set_value("not-an-email");

    assert_eq!(validator.on_submit(), SubmitOutcome::Rejected);

    assert_eq!(message(&form, "firstName").as_deref(), Some("This field is required"));
    assert_eq!(message(&form, "lastName").as_deref(), Some("This field is required"));
    assert_eq!(
        message(&form, "email").as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(message(&form, "phone").as_deref(), Some("This field is required"));
    assert_eq!(
        message(&form, "terms").as_deref(),
        Some("You must agree to the terms and conditions")
    );

    // Siblings under one parent get separate nodes
    let first = described_by(&form, "firstName").unwrap();
    let last = described_by(&form, "lastName").unwrap();
    assert_ne!(first.id(), last.id());
    assert_eq!(form.query_selector_all(".row .invalid-feedback").unwrap().length(), 2);

    // Anti-spam inputs are valid and render nothing visible
    assert!(message(&form, "website").is_none());
    assert!(message(&form, "timestamp").is_none());

    form.remove();
}

#[wasm_bindgen_test]
fn test_fixing_a_field_removes_only_its_message() {
    let form = mount("dom-fix-one", APPLICATION_FORM);
    let (mut validator, clock) = bind(&form);
    clock.advance(5_000);
    assert_eq!(validator.on_submit(), SubmitOutcome::Rejected);

    control(&form, "firstName").set_value("Ada");
    assert!(validator.validate_field("firstName"));

    assert!(control(&form, "firstName").get_attribute("aria-describedby").is_none());
    assert!(control(&form, "firstName").class_list().contains("is-valid"));
    assert_eq!(message(&form, "lastName").as_deref(), Some("This field is required"));
    assert_eq!(message(&form, "email").as_deref(), Some("This field is required"));

    form.remove();
}

#[wasm_bindgen_test]
fn test_anti_spam_inputs_sit_in_hidden_container() {
    let form = mount("dom-trap", APPLICATION_FORM);
    let (_validator, _clock) = bind(&form);

    let trap = form.query_selector(".form-trap").unwrap().unwrap();
    assert!(trap.has_attribute("hidden"));
    assert_eq!(trap.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert!(trap.query_selector("[name=\"website\"]").unwrap().is_some());
    assert!(trap.query_selector("[name=\"timestamp\"]").unwrap().is_some());
    assert_eq!(control(&form, "website").get_attribute("tabindex").as_deref(), Some("-1"));
    assert_eq!(
        control(&form, "timestamp").get_attribute("value"),
        Some(RENDER_MS.to_string())
    );

    form.remove();
}

#[wasm_bindgen_test]
fn test_filled_honeypot_message_stays_hidden() {
    let form = mount("dom-honeypot", APPLICATION_FORM);
    let (mut validator, clock) = bind(&form);
    clock.advance(5_000);
    control(&form, "website").set_value("http://spam.example");

    assert_eq!(validator.on_submit(), SubmitOutcome::Rejected);

    let spam = described_by(&form, "website").unwrap();
    assert_eq!(spam.text_content().as_deref(), Some("Spam detected"));
    assert!(spam.closest(".form-trap").unwrap().is_some());
    assert_eq!(message(&form, "firstName").as_deref(), Some("This field is required"));
    assert_eq!(message(&form, "phone").as_deref(), Some("This field is required"));

    form.remove();
}

#[wasm_bindgen_test]
fn test_fast_submission_shows_banner() {
    let form = mount("dom-banner", APPLICATION_FORM);
    let (mut validator, clock) = bind(&form);
    clock.advance(500);

    assert_eq!(validator.on_submit(), SubmitOutcome::Rejected);

    let banner = form.query_selector(".alert-danger").unwrap().unwrap();
    assert_eq!(
        banner.text_content().as_deref(),
        Some("Form submitted too quickly. Please try again.")
    );
    assert_eq!(banner.get_attribute("role").as_deref(), Some("alert"));

    form.remove();
}

#[wasm_bindgen_test]
fn test_accepted_submission_disables_button() {
    let form = mount("dom-accepted", APPLICATION_FORM);
    let (mut validator, clock) = bind(&form);
    clock.advance(5_000);
    control(&form, "firstName").set_value("Ada");
    control(&form, "lastName").set_value("Lovelace");
    control(&form, "email").set_value("ada@example.edu");
    control(&form, "phone").set_value("(555) 123-4567");
    control(&form, "terms").set_checked(true);

    assert!(matches!(validator.on_submit(), SubmitOutcome::Accepted { .. }));

    let button: HtmlButtonElement = form
        .query_selector("button[type=\"submit\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("Submitting..."));
    assert!(form.query_selector(".alert-danger").unwrap().is_none());

    form.remove();
}

#[wasm_bindgen_test]
fn test_malformed_config_does_not_block_other_forms() {
    let broken = mount("dom-broken-config", APPLICATION_FORM);
    broken.set_attribute("data-validator-config", "{not json").unwrap();
    let healthy = mount("dom-healthy-config", APPLICATION_FORM);

    let ids: Vec<String> = ["dom-broken-config", "dom-healthy-config", "dom-missing"]
        .iter()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(attach_all(&ids), 1);
    assert!(healthy.query_selector(".form-trap").unwrap().is_some());
    assert!(broken.query_selector(".form-trap").unwrap().is_none());

    broken.remove();
    healthy.remove();
}

#[wasm_bindgen_test]
fn test_nav_link_for_current_page_is_marked() {
    let document = document();
    let nav = document.create_element("nav").unwrap();
    nav.set_inner_html(
        r#"<a class="nav-link active" href="index.html">Home</a>
           <a class="nav-link" href="programs.html">Programs</a>"#,
    );
    document.body().unwrap().append_child(&nav).unwrap();

    mark_active_links(&document, "/college/programs.html").unwrap();

    let links = nav.query_selector_all(".nav-link").unwrap();
    let home: Element = links.get(0).unwrap().dyn_into().unwrap();
    let programs: Element = links.get(1).unwrap().dyn_into().unwrap();
    assert!(!home.class_list().contains("active"));
    assert!(home.get_attribute("aria-current").is_none());
    assert!(programs.class_list().contains("active"));
    assert_eq!(programs.get_attribute("aria-current").as_deref(), Some("page"));

    nav.remove();
}

#[wasm_bindgen_test]
fn test_skip_link_inserted_once() {
    let document = document();
    insert_skip_link(&document).unwrap();
    insert_skip_link(&document).unwrap();

    let links = document.query_selector_all(".skip-link").unwrap();
    assert_eq!(links.length(), 1);
    let body = document.body().unwrap();
    let first: Element = body.first_element_child().unwrap();
    assert!(first.class_list().contains("skip-link"));
    assert_eq!(first.get_attribute("href").as_deref(), Some("#main-content"));
    assert_eq!(first.text_content().as_deref(), Some("Skip to main content"));
}
