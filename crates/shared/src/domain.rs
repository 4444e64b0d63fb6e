use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const EMAIL_FIELD: &str = "email";
pub const CERTIFIED_DIVER_FIELD: &str = "certified_diver";
pub const CERTIFIED_INSTRUCTOR_FIELD: &str = "certified_instructor";
pub const MOBILE_FIELD: &str = "mobile";

/// Element identifiers the surrounding page markup provides.
pub mod element_ids {
    pub const FORM: &str = "waitlist-form";
    pub const SUCCESS_PANEL: &str = "success-message";
    pub const ERROR_PANEL: &str = "error-message";
    pub const CLOSE_SUCCESS: &str = "close-success";
    pub const CLOSE_ERROR: &str = "close-error";
}

/// Live values of the signup form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Clears every input back to empty.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub certified_diver: bool,
    pub certified_instructor: bool,
    pub mobile: String,
}

impl SignupRequest {
    /// Snapshot of the form as it stands at submit time. Checkbox fields are
    /// set only by the exact string `"true"`; the email is kept verbatim.
    pub fn from_form(form: &FormFields) -> Self {
        Self {
            email: form.get(EMAIL_FIELD).unwrap_or_default().to_string(),
            certified_diver: form.get(CERTIFIED_DIVER_FIELD) == Some("true"),
            certified_instructor: form.get(CERTIFIED_INSTRUCTOR_FIELD) == Some("true"),
            mobile: form.get(MOBILE_FIELD).unwrap_or_default().to_string(),
        }
    }
}

/// Whatever the endpoint answered on success. Never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionResult(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_request_with_defaults_for_missing_fields() {
        let form = FormFields::new()
            .with(EMAIL_FIELD, "user@example.com")
            .with(CERTIFIED_DIVER_FIELD, "true");

        assert_eq!(
            SignupRequest::from_form(&form),
            SignupRequest {
                email: "user@example.com".into(),
                certified_diver: true,
                certified_instructor: false,
                mobile: String::new(),
            }
        );
    }

    #[test]
    fn checkbox_fields_only_accept_exact_true() {
        let form = FormFields::new()
            .with(CERTIFIED_DIVER_FIELD, "TRUE")
            .with(CERTIFIED_INSTRUCTOR_FIELD, "on");

        let request = SignupRequest::from_form(&form);
        assert!(!request.certified_diver);
        assert!(!request.certified_instructor);
    }

    #[test]
    fn email_is_not_trimmed() {
        let form = FormFields::new().with(EMAIL_FIELD, " user@example.com ");
        assert_eq!(SignupRequest::from_form(&form).email, " user@example.com ");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let request = SignupRequest {
            email: "a@b.co".into(),
            certified_diver: false,
            certified_instructor: true,
            mobile: "0412".into(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "email": "a@b.co",
                "certified_diver": false,
                "certified_instructor": true,
                "mobile": "0412",
            })
        );
    }

    #[test]
    fn reset_empties_the_form() {
        let mut form = FormFields::new().with(EMAIL_FIELD, "x@y.z").with(MOBILE_FIELD, "1");
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.get(EMAIL_FIELD), None);
    }
}
