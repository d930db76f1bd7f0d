//! Payment Submission Payload
//!
//! Wire shape for the card payment write. Several fields are placeholder
//! values the backend currently accepts as-is; the tests pin each of them
//! so a product decision to collect real data shows up as a test change.

use serde::{Deserialize, Serialize};

use crate::form::CardInput;

/// Channel tag sent with every widget-originated payment
pub const CHANNEL_WEB: &str = "WEB";

/// Placeholder contact email (holder contact data is not collected yet)
pub const PLACEHOLDER_EMAIL: &str = "user@example.com";

/// Placeholder contact phone
pub const PLACEHOLDER_PHONE: &str = "+7777777777";

/// Body of `POST /v2/orders/{id}/payments/car`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPaymentRequest {
    /// Formatted card number as entered
    pub pan: String,

    /// Expiry in MM/YY shape
    pub exp: String,

    /// Security code as entered
    pub cvc: String,

    /// Cardholder name (not collected)
    pub holder: String,

    /// Whether to store the card with the shop
    pub save: bool,

    /// Contact email (placeholder)
    pub email: String,

    /// Contact phone (placeholder)
    pub phone: String,

    /// Stored-card identifier (unused for fresh card entry)
    pub card_id: String,

    /// Device fingerprint (not collected)
    pub fingerprint: String,

    /// Phone verification timestamp (not collected)
    pub phone_check_date: String,

    /// Originating channel
    pub channel: String,
}

impl CardPaymentRequest {
    /// Build a payload from the current card input.
    ///
    /// Constructed fresh per submit; never cached or retried.
    pub fn from_input(input: &CardInput) -> Self {
        Self {
            pan: input.number.clone(),
            exp: input.expiry.clone(),
            cvc: input.cvv.clone(),
            holder: String::new(),
            save: input.save_card,
            email: PLACEHOLDER_EMAIL.into(),
            phone: PLACEHOLDER_PHONE.into(),
            card_id: String::new(),
            fingerprint: String::new(),
            phone_check_date: String::new(),
            channel: CHANNEL_WEB.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CardInput {
        CardInput {
            number: "4444 4444 4444 4444".into(),
            expiry: "12/45".into(),
            cvv: "123".into(),
            save_card: true,
        }
    }

    #[test]
    fn test_payload_carries_card_fields() {
        let request = CardPaymentRequest::from_input(&sample_input());
        assert_eq!(request.pan, "4444 4444 4444 4444");
        assert_eq!(request.exp, "12/45");
        assert_eq!(request.cvc, "123");
        assert!(request.save);
    }

    /// The contact and device fields are hardcoded placeholders, not real
    /// user data. Pinned here on purpose: populating them for real is a
    /// product decision, not a silent fix.
    #[test]
    fn test_payload_keeps_placeholder_contact_fields() {
        let request = CardPaymentRequest::from_input(&sample_input());
        assert_eq!(request.holder, "");
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.phone, "+7777777777");
        assert_eq!(request.card_id, "");
        assert_eq!(request.fingerprint, "");
        assert_eq!(request.phone_check_date, "");
        assert_eq!(request.channel, "WEB");
    }

    #[test]
    fn test_payload_wire_shape() {
        let request = CardPaymentRequest::from_input(&sample_input());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pan": "4444 4444 4444 4444",
                "exp": "12/45",
                "cvc": "123",
                "holder": "",
                "save": true,
                "email": "user@example.com",
                "phone": "+7777777777",
                "card_id": "",
                "fingerprint": "",
                "phone_check_date": "",
                "channel": "WEB"
            })
        );
    }
}
