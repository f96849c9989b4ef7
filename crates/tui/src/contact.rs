//! Contact form validation and the outbound submission port.

use std::fmt;

use hbt_types::ContactMessage;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::info;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

/// Inputs collected by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Tell me about your project...",
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Checks the raw form values and builds a trimmed [`ContactMessage`].
///
/// Every field is required; the email must look like `local@domain.tld`.
/// All problems are reported at once, in field order.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, Vec<FieldError>> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError {
            field: ContactField::Name,
            message: "Please tell me your name.",
        });
    }
    if email.is_empty() {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "An email address is required.",
        });
    } else if !EMAIL_REGEX.is_match(email) {
        errors.push(FieldError {
            field: ContactField::Email,
            message: "That doesn't look like an email address.",
        });
    }
    if message.is_empty() {
        errors.push(FieldError {
            field: ContactField::Message,
            message: "Say a few words about your project.",
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Failure reported by a [`ContactTransport`].
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact transport unavailable: {0}")]
    Unavailable(String),
    #[error("contact message rejected: {0}")]
    Rejected(String),
}

/// Delivers validated contact messages somewhere.
pub trait ContactTransport: Send + Sync {
    fn submit(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Default transport: records the submission in the log and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

impl ContactTransport for LogTransport {
    fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        info!(
            name = %message.name,
            email = %message.email,
            length = message.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_trimmed() {
        let message = validate_contact("  Ada ", "ada@example.com ", "\nHi there\n").expect("valid");
        assert_eq!(
            message,
            ContactMessage {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi there".into(),
            }
        );
    }

    #[test]
    fn empty_fields_are_all_reported() {
        let errors = validate_contact("", "   ", "").expect_err("invalid");
        let fields: Vec<ContactField> = errors.iter().map(|error| error.field).collect();
        assert_eq!(fields, vec![ContactField::Name, ContactField::Email, ContactField::Message]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let errors = validate_contact("Ada", email, "Hi").expect_err(email);
            assert_eq!(errors.len(), 1, "{email}");
            assert_eq!(errors[0].field, ContactField::Email);
        }
    }

    #[test]
    fn log_transport_accepts_everything() {
        let message = validate_contact("Ada", "ada@example.com", "Hi").expect("valid");
        assert!(LogTransport.submit(&message).is_ok());
    }
}
