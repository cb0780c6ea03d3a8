use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 unreserved characters stay literal; everything else is escaped,
// including space (as %20, never '+').
const MAILTO_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in your {0} before sending.")]
    MissingField(ContactField),
    #[error("No contact address is configured.")]
    NoRecipient,
}

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed, validated form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        let message = required(&self.message, ContactField::Message)?;
        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Portfolio contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_href(&self, recipient: &str) -> Result<String, ContactError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(ContactError::NoRecipient);
        }
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            utf8_percent_encode(&self.subject(), MAILTO_QUERY),
            utf8_percent_encode(&self.body(), MAILTO_QUERY),
        ))
    }
}

fn required(value: &str, field: ContactField) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_empty() {
        let draft = ContactDraft::new("  ", "a@b.c", "hi");
        assert_eq!(
            draft.validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn missing_recipient_is_an_error() {
        let message = ContactDraft::new("Ada", "ada@example.com", "hi")
            .validate()
            .unwrap();
        assert_eq!(message.mailto_href("  "), Err(ContactError::NoRecipient));
    }
}
