//! Contact requests handed off to a messaging app.
//!
//! The business takes quote requests over WhatsApp. Nothing is sent from here:
//! a [`ContactRequest`] is formatted into a greeting message and wrapped in a
//! `wa.me` link that the user opens themselves.

use crate::domain::error::{CarouselError, Result};

/// Base URL of WhatsApp click-to-chat links.
const WHATSAPP_BASE: &str = "https://wa.me";

/// Destination number of the original site, in international format without `+`.
pub const DEFAULT_NUMBER: &str = "34666754608";

/// Person greeted at the start of every message.
pub const DEFAULT_RECIPIENT: &str = "Luis Armando";

/// A filled-in quote request. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    name: String,
    phone: String,
    details: String,
}

impl ContactRequest {
    /// Validates and builds a request. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::MissingField`] naming the first blank field.
    ///
    /// ```
    /// use testimonial_carousel::domain::ContactRequest;
    ///
    /// assert!(ContactRequest::new("Ana", "600111222", "Two pallets").is_ok());
    /// assert!(ContactRequest::new("Ana", "  ", "Two pallets").is_err());
    /// ```
    pub fn new(name: &str, phone: &str, details: &str) -> Result<Self> {
        let required = |field: &'static str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(CarouselError::MissingField { field })
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            name: required("name", name)?,
            phone: required("phone", phone)?,
            details: required("details", details)?,
        })
    }
}

/// Where contact requests go: a phone number and the person to greet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    number: String,
    recipient: String,
}

impl Default for ContactChannel {
    fn default() -> Self {
        Self {
            number: DEFAULT_NUMBER.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl ContactChannel {
    /// Builds a channel from a phone number and recipient name.
    ///
    /// Spaces, dashes and a leading `+` are stripped from the number.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Config`] if the number has no digits or contains
    /// anything other than digits after stripping.
    pub fn new(number: &str, recipient: &str) -> Result<Self> {
        let digits: String = number
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CarouselError::Config(format!(
                "contact number '{number}' must contain only digits"
            )));
        }

        Ok(Self {
            number: digits,
            recipient: recipient.trim().to_string(),
        })
    }

    /// Returns the normalized destination number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Formats the pre-filled quote message for `request`.
    #[must_use]
    pub fn message(&self, request: &ContactRequest) -> String {
        format!(
            "¡Hola {}! Me gustaría solicitar un presupuesto. Mi nombre es {}. Detalles: {}. Mi teléfono es: {}",
            self.recipient, request.name, request.details, request.phone
        )
    }

    /// Returns the bare chat link, without a pre-filled message.
    #[must_use]
    pub fn chat_link(&self) -> String {
        format!("{WHATSAPP_BASE}/{}", self.number)
    }

    /// Returns the chat link with the request's message URL-encoded into `text`.
    #[must_use]
    pub fn request_link(&self, request: &ContactRequest) -> String {
        let message = self.message(request);
        format!(
            "{}?text={}",
            self.chat_link(),
            urlencoding::encode(&message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_named() {
        let err = ContactRequest::new("  ", "1", "x").unwrap_err();
        assert!(matches!(err, CarouselError::MissingField { field: "name" }));

        let err = ContactRequest::new("Ana", "1", "\n").unwrap_err();
        assert!(matches!(err, CarouselError::MissingField { field: "details" }));
    }

    #[test]
    fn message_follows_greeting_template() {
        let request = ContactRequest::new(" Ana ", "600111222", "Dos palets").unwrap();
        let channel = ContactChannel::default();

        assert_eq!(
            channel.message(&request),
            "¡Hola Luis Armando! Me gustaría solicitar un presupuesto. Mi nombre es Ana. \
             Detalles: Dos palets. Mi teléfono es: 600111222"
        );
    }

    #[test]
    fn request_link_encodes_message() {
        let request = ContactRequest::new("Ana", "600", "A & B").unwrap();
        let link = ContactChannel::default().request_link(&request);

        assert!(link.starts_with("https://wa.me/34666754608?text="));
        assert!(link.contains("%C2%A1Hola%20Luis%20Armando%21"));
        assert!(link.contains("A%20%26%20B"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn channel_normalizes_number() {
        let channel = ContactChannel::new("+34 666-754-608", "Luis").unwrap();
        assert_eq!(channel.number(), "34666754608");
        assert_eq!(channel.chat_link(), "https://wa.me/34666754608");
    }

    #[test]
    fn channel_rejects_non_digits() {
        assert!(ContactChannel::new("call me", "Luis").is_err());
        assert!(ContactChannel::new("+", "Luis").is_err());
    }
}
