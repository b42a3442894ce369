// File: src/interactive.rs
// Purpose: Page helpers outside the validator (progress bar, program filter, navigation)

/// Filter value that shows every program card
pub const SHOW_ALL: &str = "all";

/// One input inside a `.form-section`, as seen by the progress bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInput {
    pub required: bool,
    /// Raw, untrimmed value. Checkboxes report their `value` attribute.
    pub value: String,
}

impl SectionInput {
    pub fn new(required: bool, value: impl Into<String>) -> Self {
        Self {
            required,
            value: value.into(),
        }
    }
}

/// A section is complete when no required input is empty
pub fn section_complete(inputs: &[SectionInput]) -> bool {
    inputs.iter().all(|input| !input.required || !input.value.is_empty())
}

/// Percentage of complete sections, 0 when there are none
pub fn progress_percent(sections: &[Vec<SectionInput>]) -> f64 {
    if sections.is_empty() {
        return 0.0;
    }
    let completed = sections.iter().filter(|s| section_complete(s)).count();
    completed as f64 / sections.len() as f64 * 100.0
}

/// Whether a card with `category` shows under `filter`
pub fn is_card_visible(filter: &str, category: &str) -> bool {
    filter == SHOW_ALL || filter == category
}

/// Page assumed when the path ends in `/`
pub const DEFAULT_PAGE: &str = "index.html";

/// Last path segment of a URL pathname, `index.html` when empty
///
/// # Examples
/// ```
/// use campus_forms::interactive::current_page;
/// assert_eq!(current_page("/site/programs.html"), "programs.html");
/// assert_eq!(current_page("/"), "index.html");
/// ```
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

/// Whether a nav link's `href` points at the current page
pub fn is_active_link(pathname: &str, href: &str) -> bool {
    href == current_page(pathname)
}

/// Where Tab should wrap to inside a focus trap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusWrap {
    First,
    Last,
}

/// Decides whether Tab (or Shift+Tab) leaves the trap and must wrap
///
/// `active` is the index of the focused element among `count` focusables.
pub fn focus_wrap(active: Option<usize>, count: usize, backwards: bool) -> Option<FocusWrap> {
    if count == 0 {
        return None;
    }
    match (backwards, active) {
        (true, Some(0)) => Some(FocusWrap::Last),
        (false, Some(i)) if i == count - 1 => Some(FocusWrap::First),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_complete() {
        assert!(section_complete(&[]));
        assert!(section_complete(&[
            SectionInput::new(true, "Ada"),
            SectionInput::new(false, ""),
        ]));
        assert!(!section_complete(&[SectionInput::new(true, "")]));
        // Raw value: whitespace still counts as filled
        assert!(section_complete(&[SectionInput::new(true, " ")]));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(&[]), 0.0);

        let sections = vec![
            vec![SectionInput::new(true, "Ada")],
            vec![SectionInput::new(true, "")],
            vec![SectionInput::new(false, "")],
            vec![SectionInput::new(true, "on")],
        ];
        assert_eq!(progress_percent(&sections), 75.0);
    }

    #[test]
    fn test_card_visibility() {
        assert!(is_card_visible("all", "mechanical"));
        assert!(is_card_visible("computer", "computer"));
        assert!(!is_card_visible("computer", "civil"));
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/programs.html"), "programs.html");
        assert_eq!(current_page("/college/contact.html"), "contact.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/college/"), "index.html");
    }

    #[test]
    fn test_active_link() {
        assert!(is_active_link("/index.html", "index.html"));
        assert!(is_active_link("/", "index.html"));
        assert!(!is_active_link("/about.html", "index.html"));
        assert!(!is_active_link("/about.html", "#main-content"));
    }

    #[test]
    fn test_focus_wrap() {
        assert_eq!(focus_wrap(Some(2), 3, false), Some(FocusWrap::First));
        assert_eq!(focus_wrap(Some(0), 3, true), Some(FocusWrap::Last));
        assert_eq!(focus_wrap(Some(1), 3, false), None);
        assert_eq!(focus_wrap(Some(0), 3, false), None);
        assert_eq!(focus_wrap(None, 3, true), None);
        assert_eq!(focus_wrap(Some(0), 0, true), None);
        // A single focusable wraps onto itself both ways
        assert_eq!(focus_wrap(Some(0), 1, false), Some(FocusWrap::First));
    }
}
