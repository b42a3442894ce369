//! Page interactivity: program filter, FAQ accordion, registration progress

use campus_forms::interactive::{is_card_visible, progress_percent, SectionInput};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::dom::{document, warn_on_err};

const FADE_IN_MS: u32 = 50;
const FADE_OUT_MS: u32 = 300;
const ACCORDION_TRANSITION_MS: u32 = 300;

pub(crate) fn select_all(root: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn select_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        warn_on_err(html.style().set_property(property, value), "set style");
    }
}

/// Wires every interactive widget present on the page
pub fn init() -> Result<(), JsValue> {
    let document = document()?;
    init_program_filter(&document)?;
    init_faq_accordion(&document)?;
    init_form_progress(&document)?;
    Ok(())
}

fn init_program_filter(document: &Document) -> Result<(), JsValue> {
    let buttons = select_all(document, ".program-filter-btn")?;
    if buttons.is_empty() {
        return Ok(());
    }
    let cards = select_all(document, "[data-category]")?;

    for button in &buttons {
        let on_click = {
            let button = button.clone();
            let buttons = buttons.clone();
            let cards = cards.clone();
            Closure::<dyn FnMut()>::new(move || {
                for other in &buttons {
                    warn_on_err(other.class_list().remove_1("active"), "clear active filter");
                }
                warn_on_err(button.class_list().add_1("active"), "mark active filter");

                let filter = button.get_attribute("data-filter").unwrap_or_default();
                for card in &cards {
                    let category = card.get_attribute("data-category").unwrap_or_default();
                    show_card(card, is_card_visible(&filter, &category));
                }
            })
        };
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::debug!(buttons = buttons.len(), cards = cards.len(), "Program filter ready");
    Ok(())
}

fn show_card(card: &Element, visible: bool) {
    let card = card.clone();
    if visible {
        set_style(&card, "display", "block");
        Timeout::new(FADE_IN_MS, move || {
            set_style(&card, "opacity", "1");
            set_style(&card, "transform", "translateY(0)");
        })
        .forget();
    } else {
        set_style(&card, "opacity", "0");
        set_style(&card, "transform", "translateY(20px)");
        Timeout::new(FADE_OUT_MS, move || set_style(&card, "display", "none")).forget();
    }
}

fn init_faq_accordion(document: &Document) -> Result<(), JsValue> {
    for item in select_all(document, ".accordion-item")? {
        let (Some(button), Some(content)) = (
            item.query_selector(".accordion-button")?,
            item.query_selector(".accordion-collapse")?,
        ) else {
            continue;
        };

        let on_click = Closure::<dyn FnMut()>::new(move || {
            warn_on_err(content.class_list().add_1("transitioning"), "start transition");
            let content = content.clone();
            Timeout::new(ACCORDION_TRANSITION_MS, move || {
                warn_on_err(content.class_list().remove_1("transitioning"), "end transition");
            })
            .forget();
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        let on_key = {
            let button = button.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" || key == " " {
                    event.prevent_default();
                    if let Some(html) = button.dyn_ref::<HtmlElement>() {
                        html.click();
                    }
                }
            })
        };
        button.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }
    Ok(())
}

fn raw_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn init_form_progress(document: &Document) -> Result<(), JsValue> {
    let (Some(form), Some(bar)) = (
        document.get_element_by_id("registrationForm"),
        document.query_selector(".progress-bar")?,
    ) else {
        return Ok(());
    };
    let sections = select_all(document, ".form-section")?;

    let update = move || {
        let snapshot: Vec<Vec<SectionInput>> = sections
            .iter()
            .map(|section| {
                select_within(section, "input, select, textarea")
                    .iter()
                    .map(|input| SectionInput::new(input.has_attribute("required"), raw_value(input)))
                    .collect()
            })
            .collect();
        let progress = progress_percent(&snapshot);
        set_style(&bar, "width", &format!("{}%", progress));
        warn_on_err(bar.set_attribute("aria-valuenow", &progress.to_string()), "set progress value");
    };
    update();

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| update());
    form.add_event_listener_with_callback("input", on_change.as_ref().unchecked_ref())?;
    form.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_program_filter_moves_active_class() {
        let document = document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_inner_html(
            r#"<button class="program-filter-btn active" data-filter="all">All</button>
               <button class="program-filter-btn" data-filter="engineering">Engineering</button>
               <div class="card" data-category="engineering"></div>
               <div class="card" data-category="arts"></div>"#,
        );
        document.body().unwrap().append_child(&section).unwrap();

        init_program_filter(&document).unwrap();
        let buttons = select_within(&section, ".program-filter-btn");
        buttons[1].dyn_ref::<HtmlElement>().unwrap().click();

        assert!(!buttons[0].class_list().contains("active"));
        assert!(buttons[1].class_list().contains("active"));
        let cards = select_within(&section, "[data-category]");
        let arts = cards[1].dyn_ref::<HtmlElement>().unwrap();
        assert_eq!(arts.style().get_property_value("opacity").unwrap(), "0");
        let engineering = cards[0].dyn_ref::<HtmlElement>().unwrap();
        assert_eq!(engineering.style().get_property_value("display").unwrap(), "block");

        section.remove();
    }
}
