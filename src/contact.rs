use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern should compile")
});

pub const NAME_LIMIT: usize = 200;
pub const EMAIL_LIMIT: usize = 254;

/// A message as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A message that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the visitor is told after submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactReply {
    Sent { name: String },
    Rejected(String),
}

impl ContactReply {
    pub fn text(&self) -> String {
        match self {
            ContactReply::Sent { name } => format!("Thanks {name}, your message is on its way 🚀"),
            ContactReply::Rejected(reason) => reason.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} is too long")]
    TooLong(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("message could not be delivered: {0}")]
    Endpoint(String),
}

fn required(field: &'static str, value: &str, limit: usize) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    if value.chars().count() > limit {
        return Err(ContactError::TooLong(field));
    }
    Ok(value.to_string())
}

impl ContactForm {
    /// Checks the form the way the page's `required`/`type=email` inputs do,
    /// with `max_message` bounding the message body in characters.
    pub fn validate(&self, max_message: usize) -> Result<ContactMessage, ContactError> {
        let name = required("name", &self.name, NAME_LIMIT)?;
        let email = required("email", &self.email, EMAIL_LIMIT)?;
        if !EMAIL.is_match(&email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = required("message", &self.message, max_message)?;
        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

/// Where validated contact messages go.
///
/// The site has no mail backend of its own; deployments provide one of these.
pub trait ContactEndpoint: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Records each message in the server log.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEndpoint;

#[cfg(feature = "ssr")]
impl ContactEndpoint for TracingEndpoint {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            length = message.message.chars().count(),
            "contact message received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let msg = form("  Abebe ", "abebe@example.com\n", " Hello there ")
            .validate(5000)
            .unwrap();
        assert_eq!(msg.name, "Abebe");
        assert_eq!(msg.email, "abebe@example.com");
        assert_eq!(msg.message, "Hello there");
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        assert_eq!(
            form("", "", "").validate(5000),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            form("A", "   ", "hi").validate(5000),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            form("A", "a@b.co", "\t").validate(5000),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plain", "a@b", "a b@c.de", "@example.com", "a@@b.com"] {
            assert_eq!(
                form("A", bad, "hi").validate(5000),
                Err(ContactError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
        assert!(form("A", "first.last+tag@mail.example.org", "hi")
            .validate(5000)
            .is_ok());
    }

    #[test]
    fn test_reply_text() {
        let sent = ContactReply::Sent {
            name: "Sara".to_string(),
        };
        assert_eq!(sent.text(), "Thanks Sara, your message is on its way 🚀");
        let rejected = ContactReply::Rejected(ContactError::InvalidEmail.to_string());
        assert_eq!(rejected.text(), "please enter a valid email address");
    }

    #[test]
    fn test_message_limit_counts_chars() {
        assert!(form("A", "a@b.co", "ሰላም").validate(4).is_ok());
        assert_eq!(
            form("A", "a@b.co", "ሰላም ሰላም").validate(4),
            Err(ContactError::TooLong("message"))
        );
    }

    struct Inbox(Mutex<Vec<ContactMessage>>);

    impl ContactEndpoint for Inbox {
        fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.0
                .lock()
                .map_err(|e| ContactError::Endpoint(e.to_string()))?
                .push(message.clone());
            Ok(())
        }
    }

    #[test]
    fn test_endpoint_receives_validated_message() {
        let inbox = Inbox(Mutex::new(Vec::new()));
        let endpoint: &dyn ContactEndpoint = &inbox;
        let msg = form("Sara", "sara@example.com", "Let's build").validate(5000).unwrap();
        endpoint.deliver(&msg).unwrap();
        let received = inbox.0.lock().unwrap();
        assert_eq!(received.as_slice(), &[msg]);
    }
}
