//! Email address utilities for the authentication flow.
//!
//! Addresses are normalized (trimmed, lowercased) before any lookup or
//! storage so that the unique-email invariant holds regardless of how the
//! client typed the address. Log output always goes through [`mask_email`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check: local part, one '@', dotted domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Normalize an email address for storage and lookup
///
/// # Examples
///
/// ```
/// use lh_shared::utils::email::normalize_email;
/// assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate the shape of an email address (after normalization)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Mask an email address for log output
///
/// Keeps the first character of the local part and the domain, e.g.
/// `a***@example.com`. Short local parts are fully masked.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) if chars.next().is_some() => format!("{}***@{}", first, domain),
                _ => format!("***@{}", domain),
            }
        }
        None => "*".repeat(email.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" User@Example.Com "), "user@example.com");
        assert_eq!(normalize_email("already@lower.case"), "already@lower.case");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "************");
    }
}
