//! Site navigation: active link marking, mobile menu, skip link, modal focus trap

use campus_forms::interactive::{focus_wrap, is_active_link, FocusWrap};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use crate::dom::{document, warn_on_err};
use crate::interactive::select_all;

const SKIP_TARGET: &str = "#main-content";
const FOCUSABLE: &str = r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Wires navigation behaviour present on every page
pub fn init() -> Result<(), JsValue> {
    let document = document()?;
    let pathname = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .location()
        .pathname()?;
    mark_active_links(&document, &pathname)?;
    init_mobile_menu(&document)?;
    insert_skip_link(&document)?;
    init_modal_focus_trap(&document)?;
    Ok(())
}

/// Highlights the nav link for the current page and clears the rest
pub fn mark_active_links(document: &Document, pathname: &str) -> Result<(), JsValue> {
    for link in select_all(document, ".nav-link")? {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_active_link(pathname, &href) {
            link.class_list().add_1("active")?;
            link.set_attribute("aria-current", "page")?;
        } else {
            link.class_list().remove_1("active")?;
            link.remove_attribute("aria-current")?;
        }
    }
    Ok(())
}

fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(toggler), Some(collapse)) = (
        document.query_selector(".navbar-toggler")?,
        document.query_selector(".navbar-collapse")?,
    ) else {
        return Ok(());
    };
    let links = collapse.query_selector_all(".nav-link")?;
    for link in (0..links.length()).filter_map(|i| links.get(i)) {
        let on_click = {
            let toggler = toggler.clone();
            let collapse = collapse.clone();
            Closure::<dyn FnMut()>::new(move || {
                if collapse.class_list().contains("show") {
                    if let Some(html) = toggler.dyn_ref::<HtmlElement>() {
                        html.click();
                    }
                }
            })
        };
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Adds a "Skip to main content" link as the first child of `<body>`
pub fn insert_skip_link(document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    if document.query_selector(".skip-link")?.is_some() {
        return Ok(());
    }
    let link = document.create_element("a")?;
    link.set_attribute("href", SKIP_TARGET)?;
    link.set_class_name("skip-link");
    link.set_text_content(Some("Skip to main content"));
    body.insert_before(&link, body.first_child().as_ref())?;
    Ok(())
}

fn init_modal_focus_trap(document: &Document) -> Result<(), JsValue> {
    let on_key = {
        let document = document.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let Ok(Some(modal)) = document.query_selector(".modal.show") else {
                return;
            };
            trap_focus(&document, &modal, &event);
        })
    };
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

fn trap_focus(document: &Document, modal: &Element, event: &KeyboardEvent) {
    let Ok(nodes) = modal.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusables: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let active = document.active_element();
    let position = active.as_ref().and_then(|active| {
        let active: &Node = active;
        focusables.iter().position(|candidate| candidate.is_same_node(Some(active)))
    });

    let target = match focus_wrap(position, focusables.len(), event.shift_key()) {
        Some(FocusWrap::First) => focusables.first(),
        Some(FocusWrap::Last) => focusables.last(),
        None => return,
    };
    if let Some(target) = target {
        event.prevent_default();
        warn_on_err(target.focus(), "wrap modal focus");
    }
}
