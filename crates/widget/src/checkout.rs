//! Checkout: contact validation, message formatting, and the deep link.
//!
//! A submit attempt walks Idle -> Validating -> Formatting ->
//! SideChannelDispatch -> LinkOpen -> CartCleared -> Idle. Validation
//! failures abort back to Idle with a user-visible notice and no state
//! change. There is no retry state and no persisted intermediate state: the
//! cart is cleared only after the deep link has been opened, so a reload
//! mid-flow loses nothing but the in-progress form fields.

use royal_plate_core::{Cart, Phone};
use url::Url;

use crate::error::SubmitError;

/// Placeholder used when the customer leaves the name field blank.
pub const GUEST_NAME: &str = "Guest";

/// Messaging deep-link base.
const DEEP_LINK_BASE: &str = "https://wa.me";

/// Raw contact fields as read from the host page.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Customer name, optional.
    pub name: String,
    /// Customer phone, required.
    pub phone: String,
    /// Free-text notes, optional.
    pub notes: String,
}

impl ContactForm {
    /// Validate the form into contact details.
    ///
    /// All fields are trimmed. A blank name defaults to [`GUEST_NAME`];
    /// blank notes stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::MissingPhone`] if the trimmed phone is empty.
    pub fn validate(&self) -> Result<Contact, SubmitError> {
        let phone = Phone::parse(&self.phone).map_err(|_| SubmitError::MissingPhone)?;
        let name = self.name.trim();
        Ok(Contact {
            name: if name.is_empty() {
                GUEST_NAME.to_string()
            } else {
                name.to_string()
            },
            phone,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Validated contact details.
#[derive(Debug, Clone)]
pub struct Contact {
    /// Customer name, never empty.
    pub name: String,
    /// Customer phone.
    pub phone: Phone,
    /// Free-text notes, possibly empty.
    pub notes: String,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The deep link was opened and the cart cleared.
    Sent,
    /// A precondition failed; the user was notified and nothing changed.
    Rejected(SubmitError),
}

/// Format the human-readable order message.
///
/// A greeting, one line per cart entry as
/// `<name> — $<price> x <qty> = $<line total>`, a blank line, then total,
/// name, phone, and notes each on their own line. Prices are two-decimal
/// formatted.
#[must_use]
pub fn format_message(restaurant_name: &str, cart: &Cart, contact: &Contact) -> String {
    let lines = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} — {} x {} = {}",
                line.name,
                line.price,
                line.qty,
                line.line_total()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Hello {restaurant_name},\nI would like to place an order/reservation:\n\n{lines}\n\n\
         Total: {total}\nName: {name}\nPhone: {phone}\nNotes: {notes}",
        total = cart.total(),
        name = contact.name,
        phone = contact.phone,
        notes = contact.notes,
    )
}

/// Build the messaging deep link with the percent-encoded message text.
///
/// # Errors
///
/// Returns an error if the recipient identifier produces an unparseable URL.
pub fn deep_link(whatsapp_number: &str, message: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{DEEP_LINK_BASE}/{whatsapp_number}?text={}",
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use royal_plate_core::{CartLine, Money};

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.push(CartLine {
            name: "Pasta".to_string(),
            price: Money::parse_lossy("12.5"),
            qty: 2,
        });
        cart.push(CartLine::new("Soda", Money::parse_lossy("2")));
        cart
    }

    #[test]
    fn test_validate_blank_name_defaults_to_guest() {
        let form = ContactForm {
            name: "  ".to_string(),
            phone: "5551230000".to_string(),
            notes: String::new(),
        };
        let contact = form.validate().unwrap();
        assert_eq!(contact.name, "Guest");
    }

    #[test]
    fn test_validate_trims_fields() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            phone: " 5551230000 ".to_string(),
            notes: " extra napkins ".to_string(),
        };
        let contact = form.validate().unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.phone.as_str(), "5551230000");
        assert_eq!(contact.notes, "extra napkins");
    }

    #[test]
    fn test_validate_missing_phone() {
        let form = ContactForm {
            name: "Ada".to_string(),
            phone: "   ".to_string(),
            notes: String::new(),
        };
        assert_eq!(form.validate().unwrap_err(), SubmitError::MissingPhone);
    }

    #[test]
    fn test_format_message() {
        let contact = ContactForm {
            name: String::new(),
            phone: "5551230000".to_string(),
            notes: String::new(),
        }
        .validate()
        .unwrap();

        let message = format_message("The Royal Plate", &sample_cart(), &contact);

        assert!(message.starts_with("Hello The Royal Plate,\n"));
        assert!(message.contains("Pasta — $12.50 x 2 = $25.00"));
        assert!(message.contains("Soda — $2.00 x 1 = $2.00"));
        assert!(message.contains("\n\nTotal: $27.00\n"));
        assert!(message.contains("Name: Guest\n"));
        assert!(message.contains("Phone: 5551230000\n"));
        assert!(message.ends_with("Notes: "));
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let url = deep_link("15551234567", "Hello The Royal Plate,\nTotal: $27.00").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15551234567");
        let text = url.as_str();
        assert!(text.contains("text=Hello%20The%20Royal%20Plate%2C%0ATotal%3A%20%2427.00"));
    }
}
