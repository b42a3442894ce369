//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// One '@', no whitespace, at least one '.' after the '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validates basic email format (`local@domain.tld`)
///
/// Blank input is never a valid email.
pub fn is_valid_email(email: &str) -> bool {
    !crate::is_blank(email) && EMAIL_REGEX.is_match(email)
}
