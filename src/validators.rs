use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Checks whether a string has the shape of an email address:
/// local part, `@`, domain with at least one dot. This is a
/// heuristic, not an RFC 5322 validator.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
