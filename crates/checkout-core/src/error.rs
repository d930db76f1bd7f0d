//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Transport-level failure talking to the backend
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Backend answered with a non-2xx status
    #[error("Backend rejected the request with status {status}")]
    Backend { status: u16 },

    /// Order payload could not be decoded
    #[error("Malformed order record: {0}")]
    MalformedOrder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl CheckoutError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CheckoutError::Gateway(_) | CheckoutError::Backend { .. } => {
                "Payment failed. Please try again."
            }
            CheckoutError::MalformedOrder(_) | CheckoutError::Json(_) => {
                "The order could not be loaded."
            }
            CheckoutError::Config(_) => "Service configuration error.",
            CheckoutError::Other(_) => "An unexpected error occurred.",
        }
    }
}

impl From<anyhow::Error> for CheckoutError {
    fn from(err: anyhow::Error) -> Self {
        CheckoutError::Other(err.to_string())
    }
}
