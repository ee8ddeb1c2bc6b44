//! Contact form validation.
//!
//! Validation is a pure predicate over the submitted fields. Nothing is sent
//! anywhere; callers show the resulting [`Notification`](crate::Notification).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Raw field values as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Checks that all fields are filled and the email is well formed.
    ///
    /// Missing fields are reported before a malformed email.
    pub fn validate(&self) -> Result<ValidContact, ContactFormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message].map(|f| f.trim());
        let [name, email, subject, message] = fields;

        if fields.iter().any(|f| f.is_empty()) {
            return Err(ContactFormError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
