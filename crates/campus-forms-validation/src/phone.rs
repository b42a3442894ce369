//! Phone number validation and display formatting

use once_cell::sync::Lazy;
use regex::Regex;

use crate::digits_only;

// Optional '+', then 1 to 16 digits with a non-zero lead
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern is valid"));

/// Validates a phone number
///
/// Every non-digit is stripped first, so punctuation such as `(555) 123-4567`
/// is accepted. The stripped form must be 1–16 digits with a non-zero lead.
pub fn is_valid_phone(phone: &str) -> bool {
    if crate::is_blank(phone) {
        return false;
    }
    PHONE_REGEX.is_match(&digits_only(phone))
}

/// Formats digits as `(ddd) ddd-dddd` while the user types
///
/// Only the first ten digits are kept. Up to three digits stay bare;
/// the hyphen group appears once a seventh digit exists.
///
/// # Examples
/// ```
/// use campus_forms_validation::format_phone_number;
/// assert_eq!(format_phone_number("555"), "555");
/// assert_eq!(format_phone_number("5551"), "(555) 1");
/// assert_eq!(format_phone_number("555-123-4567"), "(555) 123-4567");
/// ```
pub fn format_phone_number(raw: &str) -> String {
    let digits: Vec<char> = digits_only(raw).chars().take(10).collect();
    let area: String = digits.iter().take(3).collect();
    let prefix: String = digits.iter().skip(3).take(3).collect();
    let line: String = digits.iter().skip(6).collect();

    match (prefix.is_empty(), line.is_empty()) {
        (true, _) => area,
        (false, true) => format!("({}) {}", area, prefix),
        (false, false) => format!("({}) {}-{}", area, prefix, line),
    }
}
