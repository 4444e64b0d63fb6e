use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Loose `local@domain.tld` shape check. Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError {
            email: email.to_string(),
        })
    }
}
