//! Checkout Gateway
//!
//! Abstraction over the order/payment backend (Strategy pattern).
//! Implement this for each transport: the HTTP client in `checkout-client`
//! for production, [`MockGateway`] for tests and demos.
//!
//! The widget runs on the browser's single-threaded event loop, so gateway
//! futures are not required to be `Send`.

mod mock;

pub use mock::MockGateway;

use async_trait::async_trait;

use crate::error::Result;
use crate::order::Order;
use crate::payment::CardPaymentRequest;

/// Gateway to the order/payment backend
#[async_trait(?Send)]
pub trait CheckoutGateway {
    /// Fetch the order record for an opaque order id
    async fn fetch_order(&self, order_id: &str) -> Result<Order>;

    /// Submit a card payment for an order.
    ///
    /// Any 2xx response is success; the response body is not consumed.
    async fn submit_payment(&self, order_id: &str, request: &CardPaymentRequest) -> Result<()>;

    /// Gateway name
    fn name(&self) -> &str;
}
