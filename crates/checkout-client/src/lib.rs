//! # checkout-client
//!
//! HTTP implementation of the checkout gateway: one read
//! (`GET /v2/orders/{id}`) and one write
//! (`POST /v2/orders/{id}/payments/car`).

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::CheckoutClient;
