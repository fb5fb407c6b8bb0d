use std::sync::OnceLock;

use regex_lite::Regex;

/// Minimum length of a trimmed name.
pub const NAME_MIN_LEN: usize = 3;
/// Minimum length of a trimmed message.
pub const MESSAGE_MIN_LEN: usize = 5;

pub const NAME_ERROR: &str = "Name must be at least 3 characters long.";
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const MESSAGE_ERROR: &str = "Message must be at least 5 characters long.";

/// The three field values read from the form at submission time.
///
/// A snapshot has no identity beyond the submission it was read for; it is
/// not retained after validation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Basic shape check for an email address: `local@domain.tld` with no
/// whitespace and exactly one `@`. Deliberately a heuristic, not a full
/// address grammar - `a@b.c` passes, `a b@c.d` and `a@b` do not.
pub fn is_valid_email(email: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
    pattern.is_match(email)
}

/// Run all three field rules against a submission snapshot.
///
/// Every rule is evaluated unconditionally, so the result carries between
/// zero and three messages, always in field order (name, email, message).
/// An empty list means the submission is valid. Values are trimmed before
/// any length or pattern check, so whitespace-only input fails.
pub fn validate(input: &FormInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.name.trim().chars().count() < NAME_MIN_LEN {
        errors.push(NAME_ERROR.to_string());
    }

    if !is_valid_email(input.email.trim()) {
        errors.push(EMAIL_ERROR.to_string());
    }

    if input.message.trim().chars().count() < MESSAGE_MIN_LEN {
        errors.push(MESSAGE_ERROR.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        let errors = validate(&input("Alice", "alice@example.com", "Hello there"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_name_length_boundary() {
        assert_eq!(validate(&input("Al", "a@b.c", "Hello there")), vec![NAME_ERROR]);
        assert!(validate(&input("Ali", "a@b.c", "Hello there")).is_empty());
    }

    #[test]
    fn test_message_length_boundary() {
        assert_eq!(validate(&input("Alice", "a@b.c", "Hiya")), vec![MESSAGE_ERROR]);
        assert!(validate(&input("Alice", "a@b.c", "Hiyas")).is_empty());
    }

    #[test]
    fn test_whitespace_only_fails_length_checks() {
        // Trimming happens before measuring, so padding can't satisfy a rule
        let errors = validate(&input("   ", "a@b.c", "     \t  "));
        assert_eq!(errors, vec![NAME_ERROR, MESSAGE_ERROR]);
    }

    #[test]
    fn test_padded_valid_values_pass() {
        let errors = validate(&input("  Alice  ", "  alice@example.com  ", "  Hello there  "));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_accept_boundary() {
        // The heuristic accepts some technically invalid addresses
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("a..b@c..d"));
        assert!(is_valid_email("a@b.c."));
    }

    #[test]
    fn test_email_reject_boundary() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b c.d"));
    }

    #[test]
    fn test_errors_keep_field_order() {
        let errors = validate(&input("", "", ""));
        assert_eq!(errors, vec![NAME_ERROR, EMAIL_ERROR, MESSAGE_ERROR]);
    }

    #[test]
    fn test_scenario_short_name_and_message() {
        // email passes the shape check, the other two rules fail
        let errors = validate(&input("Al", "a@b.c", "hi"));
        assert_eq!(errors, vec![NAME_ERROR, MESSAGE_ERROR]);
    }

    #[test]
    fn test_scenario_bad_email_only() {
        let errors = validate(&input("Alice", "bad-email", "Hello there"));
        assert_eq!(errors, vec![EMAIL_ERROR]);
    }
}
