//! Password validation functions

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message shown for any password that fails the policy
pub const PASSWORD_POLICY: &str = "Password must be at least 8 characters with letters and numbers";

/// Validates a password: 8+ characters, at least one ASCII letter and one ASCII digit
///
/// # Examples
/// ```
/// use campus_forms_validation::validate_password;
/// assert!(validate_password("Abcdef12").is_ok());
/// assert!(validate_password("short1").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), String> {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_alphabetic()),
        password.chars().any(|c| c.is_ascii_digit()),
    ];

    checks
        .iter()
        .all(|passed| *passed)
        .then_some(())
        .ok_or_else(|| PASSWORD_POLICY.to_string())
}

/// Boolean form of [`validate_password`]
pub fn is_valid_password(password: &str) -> bool {
    !crate::is_blank(password) && validate_password(password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(is_valid_password("Abcdef12"));
        assert!(is_valid_password("password1"));
        assert!(is_valid_password("12345678a"));
        assert!(is_valid_password("a1!@#$%^&*"));
    }

    #[test]
    fn test_invalid_passwords() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("short1"));
        assert!(!is_valid_password("alllettersnodigit"));
        assert!(!is_valid_password("1234567890"));
        assert!(!is_valid_password("!!!!!!!!"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, more than 8 bytes
        assert!(!is_valid_password("éééééa1"));
        assert!(is_valid_password("ééééééa1"));
    }

    #[test]
    fn test_policy_message() {
        assert_eq!(validate_password("short1").unwrap_err(), PASSWORD_POLICY);
    }
}
