//! String helpers shared by the predicates

/// True when the value is empty after trimming surrounding whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keeps only ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
