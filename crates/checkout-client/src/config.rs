//! Client Configuration
//!
//! One knob: the base URL of the order/payment backend.

/// Fallback backend when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Checkout client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Create a configuration, normalizing trailing slashes
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from `CHECKOUT_BASE_URL`, falling back to the
    /// default
    pub fn from_env() -> Self {
        std::env::var("CHECKOUT_BASE_URL").map_or_else(|_| Self::default(), Self::new)
    }
}
