//! Mock Checkout Gateway
//!
//! For testing and demo purposes. Outcomes are configured up front and
//! submitted payloads are recorded for assertions.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::CheckoutGateway;
use crate::error::{CheckoutError, Result};
use crate::order::{CaptureMethod, Order, OrderStatus};
use crate::payment::CardPaymentRequest;

/// Mock gateway with configurable outcomes
pub struct MockGateway {
    order: Option<Order>,
    fail_order: bool,
    fail_payment: bool,
    submissions: RefCell<Vec<(String, CardPaymentRequest)>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Gateway that serves a sample unpaid order and accepts payments
    pub fn new() -> Self {
        Self {
            order: Some(Self::sample_order()),
            fail_order: false,
            fail_payment: false,
            submissions: RefCell::new(Vec::new()),
        }
    }

    /// Serve a specific order record
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Fail every order fetch
    pub fn failing_order(mut self) -> Self {
        self.fail_order = true;
        self
    }

    /// Reject every payment submission
    pub fn failing_payment(mut self) -> Self {
        self.fail_payment = true;
        self
    }

    /// Payloads submitted so far, with their order ids
    pub fn submissions(&self) -> Vec<(String, CardPaymentRequest)> {
        self.submissions.borrow().clone()
    }

    fn sample_order() -> Order {
        Order {
            id: "b222011d-0048-4376-99f3-5851d7f74b28".into(),
            shop_id: "shop-1".into(),
            status: OrderStatus::Unpaid,
            created_at: Utc::now(),
            amount: Decimal::from(1500),
            currency: "KZT".into(),
            capture_method: CaptureMethod::Auto,
            external_id: None,
            description: Some("Sample order".into()),
            back_url: None,
            success_url: None,
            failure_url: None,
            checkout_url: None,
            access_token: None,
            extra_info: serde_json::Map::new(),
        }
    }
}

#[async_trait(?Send)]
impl CheckoutGateway for MockGateway {
    async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        if self.fail_order {
            return Err(CheckoutError::Backend { status: 500 });
        }
        let mut order = self
            .order
            .clone()
            .ok_or(CheckoutError::Backend { status: 404 })?;
        order.id = order_id.to_string();
        Ok(order)
    }

    async fn submit_payment(&self, order_id: &str, request: &CardPaymentRequest) -> Result<()> {
        self.submissions
            .borrow_mut()
            .push((order_id.to_string(), request.clone()));
        if self.fail_payment {
            return Err(CheckoutError::Backend { status: 402 });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}
