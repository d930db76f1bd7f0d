//! Order Model
//!
//! Read-only view of an order as the order service reports it.
//! Uses `rust_decimal` for the monetary amount - never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order, owned by the order service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Expired,
    Unpaid,
    OnHold,
    Paid,
}

/// Whether payment capture happens automatically or on merchant action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureMethod {
    Auto,
    Manual,
}

/// An order record fetched from the order service.
///
/// This widget never mutates an order; it is fetched once per mount and
/// rendered read-only. Optional metadata defaults when the backend omits it
/// so partial payloads still parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    /// Opaque order identifier
    pub id: String,

    /// Owning shop identifier
    pub shop_id: String,

    /// Current lifecycle status
    pub status: OrderStatus,

    /// When the order was created
    pub created_at: DateTime<Utc>,

    /// Amount due
    pub amount: Decimal,

    /// Currency code (e.g. "KZT")
    pub currency: String,

    /// Capture method for the payment
    pub capture_method: CaptureMethod,

    /// Merchant-side identifier
    #[serde(default)]
    pub external_id: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Redirect target when the customer abandons checkout
    #[serde(default)]
    pub back_url: Option<String>,

    /// Redirect target after a successful payment
    #[serde(default)]
    pub success_url: Option<String>,

    /// Redirect target after a failed payment
    #[serde(default)]
    pub failure_url: Option<String>,

    /// Hosted checkout page for this order
    #[serde(default)]
    pub checkout_url: Option<String>,

    /// Checkout access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Free-form metadata attached by the merchant
    #[serde(default)]
    pub extra_info: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    /// Whether this order can still accept a payment
    pub fn is_payable(&self) -> bool {
        self.status == OrderStatus::Unpaid
    }

    /// Amount to show in the pay button
    pub fn display_amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": "b222011d-0048-4376-99f3-5851d7f74b28",
            "shop_id": "shop-1",
            "status": "UNPAID",
            "created_at": "2024-05-01T12:00:00Z",
            "amount": 1500,
            "currency": "KZT",
            "capture_method": "AUTO",
            "description": "Test order"
        })
    }

    #[test]
    fn test_order_parses_partial_payload() {
        let order: Order = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(order.status, OrderStatus::Unpaid);
        assert_eq!(order.amount, dec!(1500));
        assert_eq!(order.capture_method, CaptureMethod::Auto);
        assert_eq!(order.description.as_deref(), Some("Test order"));
        assert!(order.checkout_url.is_none());
        assert!(order.extra_info.is_empty());
    }

    #[test]
    fn test_status_wire_casing() {
        let status: OrderStatus = serde_json::from_value(serde_json::json!("ON_HOLD")).unwrap();
        assert_eq!(status, OrderStatus::OnHold);
        assert_eq!(
            serde_json::to_value(OrderStatus::Expired).unwrap(),
            serde_json::json!("EXPIRED")
        );
    }

    #[test]
    fn test_only_unpaid_orders_are_payable() {
        let mut order: Order = serde_json::from_value(sample_json()).unwrap();
        assert!(order.is_payable());

        order.status = OrderStatus::Paid;
        assert!(!order.is_payable());
    }
}
