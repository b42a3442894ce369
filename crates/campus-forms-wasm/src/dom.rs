//! DOM-backed [`FormView`]
//!
//! Bootstrap conventions: `is-valid` / `is-invalid` classes on controls,
//! `.invalid-feedback` siblings for messages, `.alert-danger` banner.

use campus_forms::{Field, FieldKind, FieldValue, FormView, RenderStamp, ValidatorConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

const CONTROLS: &str = "input, select, textarea";
const VALID: &str = "is-valid";
const INVALID: &str = "is-invalid";
const FEEDBACK: &str = "invalid-feedback";
const SUCCESS_OVERLAY: &str = "success-overlay";
const TRAP_CONTAINER: &str = "form-trap";

const SUCCESS_MARKUP: &str = r#"
    <div class="success-icon" aria-hidden="true">&#10003;</div>
    <h3>Application Sent Successfully!</h3>
    <p>
        Thank you for your application to Engineering College!<br>
        We have received your information and will contact you soon.
    </p>
    <button type="button" class="btn btn-primary success-close">Close</button>
"#;

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Name a control is addressed by: `name`, falling back to `id`
pub(crate) fn control_name(element: &Element) -> Option<String> {
    element
        .get_attribute("name")
        .filter(|n| !n.is_empty())
        .or_else(|| Some(element.id()).filter(|id| !id.is_empty()))
}

fn control_kind(element: &Element) -> FieldKind {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        FieldKind::parse(&input.type_())
    } else {
        FieldKind::parse(&element.tag_name())
    }
}

fn control_value(element: &Element, kind: FieldKind) -> FieldValue {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if kind.is_toggle() {
            return FieldValue::Checked(input.checked());
        }
        return FieldValue::Text(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return FieldValue::Text(select.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return FieldValue::Text(area.value());
    }
    FieldValue::default()
}

pub(crate) fn scroll_to_center(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn warn_on_err(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        tracing::warn!(action, error = ?err, "DOM update failed");
    }
}

/// A live `<form>` element
pub struct DomForm {
    form: HtmlFormElement,
    form_id: String,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        let form_id = form.id();
        Self { form, form_id }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Appends the hidden honeypot and render timestamp inputs
    ///
    /// Both live in their own hidden container so anything rendered next to
    /// them (such as the honeypot's error) stays out of sight.
    pub fn inject_anti_spam(&self, config: &ValidatorConfig, stamp: RenderStamp) -> Result<(), JsValue> {
        let document = document()?;
        let mut trap: Option<Element> = None;
        let mut container = || -> Result<Element, JsValue> {
            if let Some(existing) = &trap {
                return Ok(existing.clone());
            }
            let div = document.create_element("div")?;
            div.set_class_name(TRAP_CONTAINER);
            div.set_attribute("hidden", "")?;
            div.set_attribute("aria-hidden", "true")?;
            self.form.append_child(&div)?;
            trap = Some(div.clone());
            Ok(div)
        };

        if self.element(&config.honeypot_field).is_none() {
            let honeypot = document.create_element("input")?;
            honeypot.set_attribute("type", "text")?;
            honeypot.set_attribute("name", &config.honeypot_field)?;
            honeypot.set_attribute("tabindex", "-1")?;
            honeypot.set_attribute("autocomplete", "off")?;
            container()?.append_child(&honeypot)?;
        }

        if self.element(&config.timestamp_field).is_none() {
            let timestamp = document.create_element("input")?;
            timestamp.set_attribute("type", "hidden")?;
            timestamp.set_attribute("name", &config.timestamp_field)?;
            // Attribute, not property: survives form.reset()
            timestamp.set_attribute("value", &stamp.millis().to_string())?;
            container()?.append_child(&timestamp)?;
        }

        Ok(())
    }

    fn controls(&self) -> Vec<Element> {
        let Ok(nodes) = self.form.query_selector_all(CONTROLS) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element(&self, name: &str) -> Option<Element> {
        self.controls()
            .into_iter()
            .find(|el| control_name(el).as_deref() == Some(name))
    }

    /// Id of the message node rendered for `name`
    pub fn feedback_id(&self, name: &str) -> String {
        format!("error-{}-{}", self.form_id, name)
    }

    /// The message node owned by this control: ours by id, or a
    /// `.invalid-feedback` authored right after the control
    fn feedback_for(&self, element: &Element, name: &str) -> Option<Element> {
        let id = self.feedback_id(name);
        let owned = document().ok().and_then(|doc| doc.get_element_by_id(&id));
        owned.or_else(|| {
            element
                .next_element_sibling()
                .filter(|sibling| sibling.class_list().contains(FEEDBACK))
        })
    }

    fn remove_feedback(&self, element: &Element, name: &str) {
        if let Some(feedback) = self.feedback_for(element, name) {
            feedback.remove();
        }
        warn_on_err(element.remove_attribute("aria-describedby"), "remove aria-describedby");
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }

    fn build_success_overlay(&self) -> Result<(), JsValue> {
        let document = document()?;
        let overlay = document.create_element("div")?;
        overlay.set_class_name(SUCCESS_OVERLAY);
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;

        let message = document.create_element("div")?;
        message.set_class_name("success-message");
        message.set_inner_html(SUCCESS_MARKUP);
        overlay.append_child(&message)?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&overlay)?;

        let on_escape = {
            let overlay = overlay.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    overlay.remove();
                }
            })
        };
        overlay.add_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref())?;
        on_escape.forget();

        if let Some(close) = overlay
            .query_selector(".success-close")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let on_close = {
                let overlay = overlay.clone();
                Closure::<dyn FnMut()>::new(move || overlay.remove())
            };
            close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
            on_close.forget();
            close.focus()?;
        }

        Ok(())
    }
}

impl FormView for DomForm {
    fn fields(&self) -> Vec<Field> {
        self.controls()
            .iter()
            .filter_map(|el| {
                let name = control_name(el)?;
                let kind = control_kind(el);
                Some(Field {
                    name,
                    kind,
                    value: control_value(el, kind),
                    required: el.has_attribute("required"),
                })
            })
            .collect()
    }

    fn set_text(&mut self, name: &str, value: &str) {
        let Some(element) = self.element(name) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn mark_valid(&mut self, name: &str) {
        let Some(element) = self.element(name) else {
            return;
        };
        let classes = element.class_list();
        warn_on_err(classes.add_1(VALID), "add valid class");
        warn_on_err(classes.remove_1(INVALID), "remove invalid class");
        self.remove_feedback(&element, name);
    }

    fn mark_invalid(&mut self, name: &str, message: &str) {
        let Some(element) = self.element(name) else {
            return;
        };
        let classes = element.class_list();
        warn_on_err(classes.add_1(INVALID), "add invalid class");
        warn_on_err(classes.remove_1(VALID), "remove valid class");

        let feedback = match self.feedback_for(&element, name) {
            Some(existing) => existing,
            None => {
                let created = document().and_then(|doc| {
                    let parent = element
                        .parent_element()
                        .ok_or_else(|| JsValue::from_str("control has no parent"))?;
                    let div = doc.create_element("div")?;
                    div.set_class_name(FEEDBACK);
                    parent.append_child(&div)?;
                    Ok(div)
                });
                match created {
                    Ok(div) => div,
                    Err(err) => {
                        tracing::warn!(field = name, error = ?err, "Could not create error message");
                        return;
                    }
                }
            }
        };

        feedback.set_text_content(Some(message));
        feedback.set_id(&self.feedback_id(name));
        warn_on_err(
            element.set_attribute("aria-describedby", &feedback.id()),
            "set aria-describedby",
        );
    }

    fn clear_state(&mut self, name: &str) {
        let Some(element) = self.element(name) else {
            return;
        };
        warn_on_err(element.class_list().remove_2(VALID, INVALID), "clear classes");
        self.remove_feedback(&element, name);
    }

    fn show_general_error(&mut self, message: &str) {
        self.clear_general_error();

        let result = document().and_then(|doc| {
            let alert = doc.create_element("div")?;
            alert.set_class_name("alert alert-danger");
            alert.set_attribute("role", "alert")?;
            alert.set_text_content(Some(message));
            self.form
                .insert_before(&alert, self.form.first_child().as_ref())?;
            scroll_to_center(&alert);
            Ok(())
        });
        warn_on_err(result, "show general error");
    }

    fn clear_general_error(&mut self) {
        if let Ok(Some(existing)) = self.form.query_selector(".alert-danger") {
            existing.remove();
        }
    }

    fn focus(&mut self, name: &str) {
        let Some(element) = self.element(name) else {
            return;
        };
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            warn_on_err(html.focus(), "focus field");
        }
        scroll_to_center(&element);
    }

    fn set_submitting(&mut self, busy: bool, label: &str) {
        let Some(button) = self.submit_button() else {
            return;
        };
        button.set_disabled(busy);
        button.set_text_content(Some(label));
        warn_on_err(
            button.class_list().toggle_with_force("submitting", busy).map(|_| ()),
            "toggle submitting class",
        );
    }

    fn show_success(&mut self) {
        warn_on_err(self.build_success_overlay(), "show success overlay");
    }

    fn reset_values(&mut self) {
        self.form.reset();
    }
}
