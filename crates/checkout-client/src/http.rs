//! HTTP Checkout Gateway
//!
//! Implementation of `CheckoutGateway` over the backend's REST API.
//! Compiles natively and to wasm32, where reqwest rides the browser's
//! fetch API.

use async_trait::async_trait;

use checkout_core::{
    CardPaymentRequest, CheckoutError, CheckoutGateway, Order, Result,
};

use crate::config::ClientConfig;

/// HTTP client for the order/payment backend
pub struct CheckoutClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Default for CheckoutClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl CheckoutClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client pointed at a specific base URL
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ClientConfig::new(base_url))
    }

    /// Create a client from environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn order_url(&self, order_id: &str) -> String {
        format!("{}/v2/orders/{order_id}", self.config.base_url)
    }

    fn payment_url(&self, order_id: &str) -> String {
        format!("{}/v2/orders/{order_id}/payments/car", self.config.base_url)
    }
}

#[async_trait(?Send)]
impl CheckoutGateway for CheckoutClient {
    async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        let response = self
            .http
            .get(self.order_url(order_id))
            .send()
            .await
            .map_err(|e| CheckoutError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::Backend {
                status: status.as_u16(),
            });
        }

        response
            .json::<Order>()
            .await
            .map_err(|e| CheckoutError::MalformedOrder(e.to_string()))
    }

    async fn submit_payment(&self, order_id: &str, request: &CardPaymentRequest) -> Result<()> {
        let response = self
            .http
            .post(self.payment_url(order_id))
            .json(request)
            .send()
            .await
            .map_err(|e| CheckoutError::Gateway(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(order_id, "payment accepted");
            Ok(())
        } else {
            Err(CheckoutError::Backend {
                status: status.as_u16(),
            })
        }
    }

    fn name(&self) -> &str {
        "HttpCheckout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_url_shape() {
        let client = CheckoutClient::from_base_url("https://pay.example.com/");
        assert_eq!(
            client.order_url("order-7"),
            "https://pay.example.com/v2/orders/order-7"
        );
    }

    #[test]
    fn test_payment_url_shape() {
        let client = CheckoutClient::from_base_url("https://pay.example.com");
        assert_eq!(
            client.payment_url("order-7"),
            "https://pay.example.com/v2/orders/order-7/payments/car"
        );
    }
}
